//! Application error type and its HTTP rendering.
//!
//! Every failure a client can cause collapses into one of two fixed messages.
//! Both are returned with `200 OK` and a `{"error": "..."}` body so existing
//! clients that only inspect the JSON keep working.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use crate::application::services::url_validator::UrlRejection;
use crate::domain::entities::ParseShortIdError;

/// JSON body returned for every error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing input, malformed URL, disallowed scheme, or unresolvable host.
    #[error("invalid url")]
    InvalidUrl,

    /// Non-numeric, non-positive, or never-issued short identifier.
    #[error("No short URL found for the given input")]
    NotFound,

    /// Server-side failure. The detail is logged and not returned.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Message exposed to clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidUrl => "invalid url",
            AppError::NotFound => "No short URL found for the given input",
            AppError::Internal(_) => "internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl | AppError::NotFound => StatusCode::OK,
            AppError::Internal(detail) => {
                error!("Internal error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UrlRejection> for AppError {
    fn from(rejection: UrlRejection) -> Self {
        debug!("URL rejected: {}", rejection);
        AppError::InvalidUrl
    }
}

impl From<ParseShortIdError> for AppError {
    fn from(e: ParseShortIdError) -> Self {
        debug!("Short id rejected: {}", e);
        AppError::NotFound
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        debug!("Form validation failed: {}", errors);
        AppError::InvalidUrl
    }
}
