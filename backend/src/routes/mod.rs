//! Route definitions for the Farmie API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop recommendations
        .nest("/recommendations", recommendation_routes())
        // Farm weather summaries
        .nest("/farms", farm_routes())
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_recommendations))
        .route("/report", get(handlers::get_recommendation_report))
}

/// Farm routes
fn farm_routes() -> Router<AppState> {
    Router::new().route("/:farm_id/weather", get(handlers::get_farm_weather))
}
