//! Route definitions for the Climate Observation API
//!
//! Every route is a GET. Literal segments win over the `:start_date`
//! capture, so `/api/v1.0/stations` never reaches the summary handler.

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Version prefix of every data route
pub const API_PREFIX: &str = "/api/v1.0";

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(handlers::list_precipitation))
        .route("/stations", get(handlers::list_stations))
        .route("/temp", get(handlers::recent_temperatures))
        .route("/:start_date", get(handlers::temperature_stats))
        .route("/:start_date/:end_date", get(handlers::temperature_stats_range))
}
