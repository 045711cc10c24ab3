//! API route configuration.
//!
//! All API endpoints are public; there is no authentication.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                - Fixed greeting for reachability checks
/// - `POST /shorturl`             - Create or fetch the short URL for a long URL
/// - `GET  /shorturl/{short_url}` - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
