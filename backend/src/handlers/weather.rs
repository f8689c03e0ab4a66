//! HTTP handlers for farm weather endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::{validate_farm_id, validate_summary_days, DateRange, FarmId};

use crate::error::{AppError, AppResult};
use crate::services::weather::FarmWeatherSummary;
use crate::AppState;

/// Query parameters for a farm weather summary
#[derive(Debug, Deserialize)]
pub struct WeatherSummaryQuery {
    /// How many days before today the window starts
    pub days: Option<u32>,
}

/// Summarize recent weather at a farm
pub async fn get_farm_weather(
    State(state): State<AppState>,
    Path(farm_id): Path<FarmId>,
    Query(query): Query<WeatherSummaryQuery>,
) -> AppResult<Json<FarmWeatherSummary>> {
    validate_farm_id(farm_id).map_err(|m| AppError::validation("farm_id", m))?;

    let days = query.days.unwrap_or(state.config.weather.summary_days);
    validate_summary_days(days).map_err(|m| AppError::validation("days", m))?;

    let window = DateRange::trailing_days(Utc::now().date_naive(), days)
        .map_err(|e| AppError::validation("days", e.to_string()))?;

    let summary = state.weather.summarize_farm(farm_id, window).await?;
    Ok(Json(summary))
}
