//! Observation and station entities as stored in the climate dataset

use serde::{Deserialize, Serialize};

/// One station's recorded precipitation and temperature for one date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub station_id: String,
    /// `YYYY-MM-DD`, compared lexically by the store
    pub date: String,
    pub precipitation: Option<f64>,
    pub temperature: Option<f64>,
}

/// A physical weather-recording site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

impl Observation {
    pub fn new(
        station_id: impl Into<String>,
        date: impl Into<String>,
        precipitation: Option<f64>,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            date: date.into(),
            precipitation,
            temperature,
        }
    }
}

impl Station {
    pub fn new(station_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
            elevation: None,
        }
    }
}
