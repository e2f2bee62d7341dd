//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use matex_core::error::MatexError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Uniform failure envelope the frontend expects.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<MatexError> for ApiError {
    fn from(err: MatexError) -> Self {
        match err {
            MatexError::ValidationError(message) => ApiError::bad_request(message),
            MatexError::MaterialNotFound(id) => {
                ApiError::not_found(format!("Material {id} not found"))
            }
            err => {
                tracing::error!(error = %err, "Upstream request failed");
                ApiError::internal(err.to_string())
            }
        }
    }
}
