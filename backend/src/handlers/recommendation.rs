//! HTTP handlers for crop recommendation endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{validate_crop_name, RecommendationList, RecommendationReport};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for a recommendation
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendationQuery {
    /// Crop the farmer currently grows or is considering
    #[validate(length(min = 1, max = 100))]
    pub crop_name: String,

    #[validate(range(min = 1))]
    pub farm_id: i64,
}

impl RecommendationQuery {
    fn check(&self) -> AppResult<()> {
        self.validate()?;
        validate_crop_name(&self.crop_name).map_err(|m| AppError::validation("crop_name", m))
    }
}

/// Recommend alternative crops for a farm
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationList>> {
    query.check()?;
    let report = state
        .recommendations
        .evaluate(&query.crop_name, query.farm_id)
        .await?;
    Ok(Json(report.into()))
}

/// Recommendation with the scores and climate behind it
pub async fn get_recommendation_report(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationReport>> {
    query.check()?;
    let report = state
        .recommendations
        .evaluate(&query.crop_name, query.farm_id)
        .await?;
    Ok(Json(report))
}
