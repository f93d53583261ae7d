//! HTTP handlers for the climate observation endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{
    validate_date, validate_date_range, PrecipitationRecord, StationRecord, TemperatureRecord,
    TemperatureSummary,
};

use crate::error::{AppError, AppResult};
use crate::services::ClimateService;
use crate::AppState;

/// List the precipitation of every observation
pub async fn list_precipitation(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PrecipitationRecord>>> {
    let service = ClimateService::new(state.db);
    let records = service.list_precipitation().await?;
    Ok(Json(records))
}

/// List every station
pub async fn list_stations(State(state): State<AppState>) -> AppResult<Json<Vec<StationRecord>>> {
    let service = ClimateService::new(state.db);
    let stations = service.list_stations().await?;
    Ok(Json(stations))
}

/// Last year of temperatures from the most active station
pub async fn recent_temperatures(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TemperatureRecord>>> {
    let service = ClimateService::new(state.db);
    let temperatures = service.recent_temperatures().await?;
    Ok(Json(temperatures))
}

/// Temperature summary for a single date
pub async fn temperature_stats(
    State(state): State<AppState>,
    Path(start_date): Path<String>,
) -> AppResult<Json<Vec<TemperatureSummary>>> {
    if state.config.api.strict_dates {
        validate_date(&start_date)
            .map_err(|message| invalid_date("start_date", &start_date, message))?;
    }

    let service = ClimateService::new(state.db);
    let summary = service.temperature_stats(&start_date).await?;
    Ok(Json(summary))
}

/// Temperature summary between two dates, both inclusive
pub async fn temperature_stats_range(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> AppResult<Json<Vec<TemperatureSummary>>> {
    if state.config.api.strict_dates {
        validate_date_range(&start_date, &end_date).map_err(|(field, message)| {
            let value = if field == "start_date" { &start_date } else { &end_date };
            invalid_date(field, value, message)
        })?;
    }

    let service = ClimateService::new(state.db);
    let summary = service
        .temperature_stats_range(&start_date, &end_date)
        .await?;
    Ok(Json(summary))
}

fn invalid_date(field: &str, value: &str, message: &str) -> AppError {
    AppError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}
