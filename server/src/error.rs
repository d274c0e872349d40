//! API error types and their HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roi_core::error::RoiError;
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RoiError> for ApiError {
    fn from(err: RoiError) -> Self {
        match err {
            RoiError::InvalidInput { .. } => ApiError::BadRequest(err.to_string()),
            RoiError::Database(_) => ApiError::Database(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

// Malformed or missing-field bodies answer 400 with the same {"error"}
// shape as every other client error, not the extractor's plain-text reply.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(msg) => {
                log::error!("storage failure: {msg}");
                // Backend details stay server-side.
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            ApiError::Internal(msg) => {
                log::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
