//! Observation store access
//!
//! The store is an SQLite file populated before the service starts. Each
//! request checks a connection out of the pool for its own duration; the
//! returned guard hands the connection back when dropped, on success and
//! error paths alike.

use std::{str::FromStr, time::Duration};

use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite, Transaction,
};

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Open a connection pool to the observation store
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    if config.min_connections > config.max_connections {
        return Err(AppError::Configuration(format!(
            "database.min_connections ({}) exceeds database.max_connections ({})",
            config.min_connections, config.max_connections
        )));
    }

    let options = SqliteConnectOptions::from_str(&config.url)?
        .read_only(config.read_only)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Check out a connection for the duration of one request
pub async fn session(pool: &SqlitePool) -> AppResult<PoolConnection<Sqlite>> {
    Ok(pool.acquire().await?)
}

/// Check out a connection inside a read transaction.
///
/// The transaction is rolled back when the guard is dropped; nothing is
/// ever written.
pub async fn read_session(pool: &SqlitePool) -> AppResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin().await?)
}

/// Check that the store answers a trivial query
pub async fn ping(pool: &SqlitePool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
