//! Test fixtures: a temporary SQLite observation store
//!
//! The store is written through a separate writable pool, then reopened
//! read-only through `db::connect` exactly as the server does.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use climate_api::{create_app, db, AppState, Config};
use shared::{Observation, Station};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;

pub const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
];

/// A seeded store that lives as long as its temporary directory
pub struct TestStore {
    pub pool: SqlitePool,
    pub config: Config,
    _dir: TempDir,
}

impl TestStore {
    pub fn app(&self) -> Router {
        create_app(AppState::new(self.pool.clone(), self.config.clone()))
    }

    pub fn strict_app(&self) -> Router {
        let mut config = self.config.clone();
        config.api.strict_dates = true;
        create_app(AppState::new(self.pool.clone(), config))
    }
}

pub async fn seed_store(observations: &[Observation], stations: &[Station]) -> TestStore {
    seed_store_with(observations, stations, &[]).await
}

/// Like `seed_store`, then runs raw `statements` for rows the typed models cannot express
pub async fn seed_store_with(
    observations: &[Observation],
    stations: &[Station],
    statements: &[&str],
) -> TestStore {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("hawaii.sqlite");

    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create store");

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&writer)
            .await
            .expect("Failed to create schema");
    }

    for observation in observations {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(&observation.station_id)
            .bind(&observation.date)
            .bind(observation.precipitation)
            .bind(observation.temperature)
            .execute(&writer)
            .await
            .expect("Failed to insert observation");
    }

    for station in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&station.station_id)
        .bind(&station.name)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.elevation)
        .execute(&writer)
        .await
        .expect("Failed to insert station");
    }

    for statement in statements {
        sqlx::query(statement)
            .execute(&writer)
            .await
            .expect("Failed to run seed statement");
    }

    writer.close().await;

    let config = Config::with_database_url(format!("sqlite://{}", path.display()));
    let pool = db::connect(&config.database)
        .await
        .expect("Failed to open store read-only");

    TestStore {
        pool,
        config,
        _dir: dir,
    }
}

pub fn obs(station: &str, date: &str, prcp: Option<f64>, tobs: Option<f64>) -> Observation {
    Observation::new(station, date, prcp, tobs)
}

/// Daily observations for `station` starting at `first_day` of August 2017
pub fn daily(station: &str, first_day: u32, days: u32, tobs: f64) -> Vec<Observation> {
    (first_day..first_day + days)
        .map(|day| obs(station, &format!("2017-08-{:02}", day), Some(0.0), Some(tobs)))
        .collect()
}

pub fn hawaii_stations() -> Vec<Station> {
    vec![
        Station::new("USC00519397", "WAIKIKI 717.2, HI US"),
        Station::new("USC00513117", "KANEOHE 838.1, HI US"),
        Station::new("USC00519281", "WAIHEE 837.5, HI US"),
    ]
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let value = serde_json::from_str(&body).expect("Response was not JSON");
    (status, value)
}
