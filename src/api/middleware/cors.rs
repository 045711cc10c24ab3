//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer that allows any origin, method and header.
///
/// The API is meant to be called from arbitrary browser front ends, and no
/// endpoint relies on cookies or credentials.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(cors::layer());
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
