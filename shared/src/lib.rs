//! Shared types and models for the Climate Observation API
//!
//! This crate contains the observation and station entities, the record
//! shapes returned over HTTP, and the date helpers used by the backend and
//! by any client that consumes the API.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
