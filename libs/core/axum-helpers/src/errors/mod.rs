pub mod handlers;
pub mod path;
pub mod responses;

pub use path::attach_request_path;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for every 5xx; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// Standard error response structure.
///
/// Every error the API returns has this shape:
///
/// ```json
/// {
///   "status": 404,
///   "error": "Not Found",
///   "message": "Product not found with id: 99",
///   "path": "/productById/99",
///   "timestamp": "2025-03-01T10:15:30.123Z"
/// }
/// ```
///
/// `path` is empty when the body is first rendered; the
/// [`attach_request_path`] middleware fills it in from the request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status (e.g. "Not Found")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Path of the request that failed
    pub path: String,
    /// When the error was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: String::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.clone())).into_response();
        // Lets `attach_request_path` find and re-render the body
        response.extensions_mut().insert(self);
        response
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        ErrorResponse::new(status, message).into_response()
    }
}
