//! JSON records returned by the `/api/v1.0` routes
//!
//! Field names follow the public wire format (`prcp`, `tobs`, `station`),
//! not the internal entity names.

use serde::{Deserialize, Serialize};

use super::{Observation, Station};

/// Entry of `/api/v1.0/precipitation`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecipitationRecord {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Entry of `/api/v1.0/stations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationRecord {
    pub station: String,
    pub name: String,
}

/// Entry of `/api/v1.0/temp`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRecord {
    pub date: String,
    pub tobs: Option<f64>,
}

/// Aggregate temperatures over a date or date range.
///
/// All three fields are null when no observation matched, mirroring an SQL
/// aggregate over an empty set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl From<&Observation> for PrecipitationRecord {
    fn from(observation: &Observation) -> Self {
        Self {
            date: observation.date.clone(),
            prcp: observation.precipitation,
        }
    }
}

impl From<&Observation> for TemperatureRecord {
    fn from(observation: &Observation) -> Self {
        Self {
            date: observation.date.clone(),
            tobs: observation.temperature,
        }
    }
}

impl From<Station> for StationRecord {
    fn from(station: Station) -> Self {
        Self {
            station: station.station_id,
            name: station.name,
        }
    }
}
