//! Handler for short URL creation endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a `url` field:
///
/// ```text
/// url=https%3A%2F%2Fexample.com
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": 1
/// }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// Responds with `{"error": "invalid url"}` when the body is missing or not a
/// form, the field is missing or empty, or the URL fails validation.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Form(payload) = form.map_err(|rejection| {
        debug!("Shorten form rejected: {}", rejection);
        AppError::InvalidUrl
    })?;

    payload.validate()?;

    let input = payload.url.as_deref().unwrap_or_default();
    let record = state.short_urls.shorten(input).await?;

    Ok(Json(record.into()))
}
