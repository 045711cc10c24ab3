//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Request Flow
///
/// 1. Parse the path segment as a positive decimal integer
/// 2. Look the identifier up in the registry
/// 3. Return 302 Found with `Location` set to the stored URL
///
/// # Errors
///
/// Responds with `{"error": "No short URL found for the given input"}` for
/// non-numeric, zero, or unknown identifiers, including segments that do not
/// percent-decode to UTF-8.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(short_url) = path.map_err(|rejection| {
        debug!("Short URL path rejected: {}", rejection);
        AppError::NotFound
    })?;

    let record = state.short_urls.resolve(&short_url).await?;

    debug!(short_id = %record.short_id, "Redirecting to {}", record.original_url);

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs that are legal header values are sent verbatim. Anything else
/// is sent as its WHATWG serialization, which percent-encodes non-ASCII
/// characters and drops control characters.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii() {
        if let Ok(value) = HeaderValue::from_str(original_url) {
            return Ok(value);
        }

        warn!(
            "Stored URL is not a valid header value, re-serializing: {:?}",
            original_url
        );
    }

    let serialized = Url::parse(original_url)
        .map_err(|e| AppError::internal(format!("stored URL no longer parses: {e}")))?;

    HeaderValue::from_str(serialized.as_str())
        .map_err(|e| AppError::internal(format!("cannot build Location header: {e}")))
}
