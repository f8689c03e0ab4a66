//! Error handling for the Farmie backend
//!
//! Every failure of a recommendation request is terminal: the caller gets an
//! explicit error, never a partial list.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::FarmId;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Lookup errors
    #[error("Crop not found: {0}")]
    CropNotFound(String),

    #[error("Farm not found: {0}")]
    FarmNotFound(FarmId),

    // Weather archive errors
    #[error("Weather archive unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed weather archive response: {0}")]
    MalformedResponse(String),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
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
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::CropNotFound(name) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "CROP_NOT_FOUND".to_string(),
                    message: format!("Crop '{}' not found", name),
                    field: Some("crop_name".to_string()),
                },
            ),
            AppError::FarmNotFound(farm_id) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "FARM_NOT_FOUND".to_string(),
                    message: format!("Farm {} not found", farm_id),
                    field: Some("farm_id".to_string()),
                },
            ),
            AppError::UpstreamUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "UPSTREAM_UNAVAILABLE".to_string(),
                    message: "Weather archive is temporarily unavailable".to_string(),
                    field: None,
                },
            ),
            AppError::MalformedResponse(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MALFORMED_RESPONSE".to_string(),
                    message: "Weather archive returned an unexpected response".to_string(),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for services and handlers
pub type AppResult<T> = Result<T, AppError>;
