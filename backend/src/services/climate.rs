//! Climate query service
//!
//! Five read-only queries over the observation store. Each call checks out
//! its own store session and releases it before returning.

use shared::{cutoff_date, PrecipitationRecord, StationRecord, TemperatureRecord, TemperatureSummary};
use sqlx::{SqliteConnection, SqlitePool};

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::{PrecipitationRow, StationRow, SummaryRow, TemperatureRow};

/// Query service over the observation store
#[derive(Clone)]
pub struct ClimateService {
    db: SqlitePool,
}

/// Observation count of the busiest station
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: i64,
}

impl ClimateService {
    /// Create a new ClimateService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Date and precipitation of every observation, in store order
    pub async fn list_precipitation(&self) -> AppResult<Vec<PrecipitationRecord>> {
        let mut conn = db::session(&self.db).await?;

        let rows = sqlx::query_as::<_, PrecipitationRow>(
            r#"
            SELECT date, prcp
            FROM measurement
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!("Loaded {} precipitation observations", rows.len());

        Ok(rows.into_iter().map(PrecipitationRecord::from).collect())
    }

    /// Code and name of every station
    pub async fn list_stations(&self) -> AppResult<Vec<StationRecord>> {
        let mut conn = db::session(&self.db).await?;

        let rows = sqlx::query_as::<_, StationRow>(
            r#"
            SELECT station, name
            FROM station
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!("Loaded {} stations", rows.len());

        Ok(rows.into_iter().map(StationRecord::from).collect())
    }

    /// Temperatures of the most active station over the year ending at the
    /// latest recorded date.
    ///
    /// Runs in a single read transaction so the latest date, the station
    /// choice and the final listing see the same store state.
    pub async fn recent_temperatures(&self) -> AppResult<Vec<TemperatureRecord>> {
        let mut tx = db::read_session(&self.db).await?;

        let latest = latest_date(&mut *tx).await?;
        let cutoff = cutoff_date(&latest)?;
        let most_active = most_active_station(&mut *tx).await?;

        tracing::debug!(
            "Recent window {}..={} for station {} ({} observations)",
            cutoff,
            latest,
            most_active.station,
            most_active.observation_count
        );

        let rows = sqlx::query_as::<_, TemperatureRow>(
            r#"
            SELECT date, tobs
            FROM measurement
            WHERE date >= ? AND station = ?
            "#,
        )
        .bind(&cutoff)
        .bind(&most_active.station)
        .fetch_all(&mut *tx)
        .await?;

        Ok(rows.into_iter().map(TemperatureRecord::from).collect())
    }

    /// Min, average and max temperature on exactly `start_date`
    pub async fn temperature_stats(&self, start_date: &str) -> AppResult<Vec<TemperatureSummary>> {
        let mut conn = db::session(&self.db).await?;

        // Aggregates over an empty set still yield one row of NULLs
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT CAST(MIN(tobs) AS REAL) AS min_tobs,
                   CAST(AVG(tobs) AS REAL) AS avg_tobs,
                   CAST(MAX(tobs) AS REAL) AS max_tobs
            FROM measurement
            WHERE date = ?
            "#,
        )
        .bind(start_date)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(TemperatureSummary::from).collect())
    }

    /// Min, average and max temperature between two dates, both inclusive
    pub async fn temperature_stats_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> AppResult<Vec<TemperatureSummary>> {
        let mut conn = db::session(&self.db).await?;

        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT CAST(MIN(tobs) AS REAL) AS min_tobs,
                   CAST(AVG(tobs) AS REAL) AS avg_tobs,
                   CAST(MAX(tobs) AS REAL) AS max_tobs
            FROM measurement
            WHERE date >= ? AND date <= ?
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(TemperatureSummary::from).collect())
    }
}

/// Most recent observation date in the store
pub async fn latest_date(conn: &mut SqliteConnection) -> AppResult<String> {
    sqlx::query_scalar::<_, Option<String>>(
        r#"
        SELECT MAX(date)
        FROM measurement
        "#,
    )
    .fetch_one(&mut *conn)
    .await?
    .ok_or(AppError::EmptyStore)
}

/// Station with the most observations; ties go to the lowest station code
pub async fn most_active_station(conn: &mut SqliteConnection) -> AppResult<StationActivity> {
    sqlx::query_as::<_, StationActivity>(
        r#"
        SELECT station, COUNT(*) AS observation_count
        FROM measurement
        GROUP BY station
        ORDER BY observation_count DESC, station ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(AppError::EmptyStore)
}
