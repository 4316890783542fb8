//! HTTP error mapping for API handlers.

use crate::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Wrapper that renders an [`AppError`] as a JSON error response.
///
/// Storage failures are logged in full and reported to clients only as a
/// generic internal error.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Snippet not found".to_string()),
            AppError::ServiceUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable, please retry".to_string(),
            ),
            AppError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match &self.0 {
            AppError::Storage(err) => tracing::error!("Storage error: {}", err),
            AppError::ServiceUnavailable { .. } => tracing::warn!("{}", self.0),
            _ => {}
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
