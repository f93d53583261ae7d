//! Database models for the Climate Observation API
//!
//! Re-exports models from the shared crate and adds the row shapes each
//! query projects out of the store.

pub use shared::models::*;

/// `date, prcp` projection of the `measurement` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// `date, tobs` projection of the `measurement` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TemperatureRow {
    pub date: String,
    pub tobs: Option<f64>,
}

/// `station, name` projection of the `station` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StationRow {
    pub station: String,
    pub name: String,
}

/// MIN/AVG/MAX of `tobs`; NULL when no row matched
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct SummaryRow {
    pub min_tobs: Option<f64>,
    pub avg_tobs: Option<f64>,
    pub max_tobs: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationRecord {
    fn from(row: PrecipitationRow) -> Self {
        PrecipitationRecord {
            date: row.date,
            prcp: row.prcp,
        }
    }
}

impl From<TemperatureRow> for TemperatureRecord {
    fn from(row: TemperatureRow) -> Self {
        TemperatureRecord {
            date: row.date,
            tobs: row.tobs,
        }
    }
}

impl From<StationRow> for StationRecord {
    fn from(row: StationRow) -> Self {
        StationRecord {
            station: row.station,
            name: row.name,
        }
    }
}

impl From<SummaryRow> for TemperatureSummary {
    fn from(row: SummaryRow) -> Self {
        TemperatureSummary {
            min: row.min_tobs,
            avg: row.avg_tobs,
            max: row.max_tobs,
        }
    }
}
