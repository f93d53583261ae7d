//! Error handling for the Climate Observation API
//!
//! Every failure is total for its request and is reported as a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::DateError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Store errors
    #[error("Observation store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Observation store returned an unreadable row: {0}")]
    CorruptRow(#[source] sqlx::Error),

    #[error("Observation store holds no observations")]
    EmptyStore,

    #[error("Stored date {value:?} is malformed: {source}")]
    DateParse {
        value: String,
        #[source]
        source: DateError,
    },

    // Request errors (strict date mode only)
    #[error("Invalid {field}: {message}")]
    InvalidDate {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::CorruptRow(_)
            | AppError::EmptyStore
            | AppError::DateParse { .. }
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            AppError::CorruptRow(_) => "CORRUPT_ROW",
            AppError::EmptyStore => "EMPTY_STORE",
            AppError::DateParse { .. } => "DATE_PARSE_ERROR",
            AppError::InvalidDate { .. } => "INVALID_DATE",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::RowNotFound => AppError::CorruptRow(err),
            other => AppError::StoreUnavailable(other),
        }
    }
}

impl From<DateError> for AppError {
    fn from(err: DateError) -> Self {
        let value = match &err {
            DateError::Parse { value, .. } | DateError::OutOfRange(value) => value.clone(),
        };
        AppError::DateParse { value, source: err }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::StoreUnavailable(_) => ErrorDetail {
                code: self.code().to_string(),
                message: "The observation store is temporarily unavailable".to_string(),
                field: None,
            },
            AppError::CorruptRow(_) => ErrorDetail {
                code: self.code().to_string(),
                message: "The observation store holds a row that cannot be read".to_string(),
                field: None,
            },
            AppError::EmptyStore => ErrorDetail {
                code: self.code().to_string(),
                message: "No observations are recorded".to_string(),
                field: None,
            },
            AppError::DateParse { value, .. } => ErrorDetail {
                code: self.code().to_string(),
                message: format!("Stored date '{}' is not in YYYY-MM-DD form", value),
                field: None,
            },
            AppError::InvalidDate { field, value, message } => ErrorDetail {
                code: self.code().to_string(),
                message: format!("{}: '{}'", message, value),
                field: Some(field.clone()),
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: self.code().to_string(),
                message: format!("Configuration error: {}", msg),
                field: None,
            },
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (self.status_code(), Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
