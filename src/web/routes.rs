//! Landing page route configuration.

use crate::state::AppState;
use crate::web::StaticAssets;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Public browser routes.
///
/// # Endpoints
///
/// - `GET /`          - Landing page (`{views_dir}/index.html`)
/// - `GET /public/*`  - Stylesheets and other assets from `public_dir`
pub fn public_routes(assets: &StaticAssets) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(assets.index_page()))
        .nest_service("/public", ServeDir::new(&assets.public_dir))
}
