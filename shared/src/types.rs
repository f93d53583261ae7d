//! Common types used across the API

use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Format of every date stored in and accepted by the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the "recent" window used by the temperature route
pub const RECENT_WINDOW_DAYS: u64 = 365;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("'{value}' is not a YYYY-MM-DD date: {source}")]
    Parse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{0}' has no date 365 days earlier")]
    OutOfRange(String),
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DateError::Parse {
        value: value.to_string(),
        source,
    })
}

/// Render a date in the stored `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Start of the recent window: `latest` minus 365 calendar days
pub fn cutoff_date(latest: &str) -> Result<String, DateError> {
    let latest_date = parse_date(latest)?;
    latest_date
        .checked_sub_days(Days::new(RECENT_WINDOW_DAYS))
        .map(format_date)
        .ok_or_else(|| DateError::OutOfRange(latest.to_string()))
}

/// An entry of the public route catalog shown on the index page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiRoute {
    pub title: &'static str,
    pub path: &'static str,
}

/// Every route served under `/api/v1.0`, in the order they are listed
pub const API_ROUTES: &[ApiRoute] = &[
    ApiRoute {
        title: "Precipitation",
        path: "/api/v1.0/precipitation",
    },
    ApiRoute {
        title: "Stations",
        path: "/api/v1.0/stations",
    },
    ApiRoute {
        title: "Temperature Observations",
        path: "/api/v1.0/temp",
    },
    ApiRoute {
        title: "Min, Max. and Avg. temperatures for a given start date (please use 'yyyy-mm-dd' format)",
        path: "/api/v1.0/<start_date>",
    },
    ApiRoute {
        title: "Min, Max. and Avg. temperatures for a given start and end date (please use 'yyyy-mm-dd' format)",
        path: "/api/v1.0/<start_date>/<end_date>",
    },
];
