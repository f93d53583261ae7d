//! Validation utilities for user-supplied query parameters
//!
//! The API passes date parameters through to the store unvalidated by
//! default. These checks back the optional strict mode.

use crate::types::parse_date;

/// Check that a value has the exact `YYYY-MM-DD` shape and names a real day
pub fn validate_date(value: &str) -> Result<(), &'static str> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return Err("Date must be 10 characters in YYYY-MM-DD form");
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err("Date must use YYYY-MM-DD form");
    }
    if parse_date(value).is_err() {
        return Err("Date does not exist in the calendar");
    }
    Ok(())
}

/// Check that a start/end pair are both valid dates
pub fn validate_date_range(start: &str, end: &str) -> Result<(), (&'static str, &'static str)> {
    validate_date(start).map_err(|e| ("start_date", e))?;
    validate_date(end).map_err(|e| ("end_date", e))?;
    Ok(())
}
