//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                         - Landing page
//! - `GET  /public/*`                 - Static assets
//! - `GET  /health`                   - Health check
//! - `GET  /api/hello`                - Greeting
//! - `POST /api/shorturl`             - Create short URL
//! - `GET  /api/shorturl/{short_url}` - Redirect
//!
//! # Middleware
//!
//! - **CORS** - Any origin may call the API
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::StaticAssets;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are not trimmed here; see [`app_router`].
pub fn build_router(state: AppState, assets: &StaticAssets) -> Router {
    Router::new()
        .merge(web::routes::public_routes(assets))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the router served in production.
///
/// Wraps [`build_router`] so `/api/shorturl/1/` is routed like `/api/shorturl/1`.
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, assets))
}
