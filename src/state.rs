//! Shared state injected into every request handler.

use std::sync::Arc;

use crate::application::services::ShortUrlService;

/// Application state cloned into each handler by axum.
///
/// Owns the only handle to the URL registry (through the service), so each
/// `AppState` built from a fresh registry is fully isolated from others.
#[derive(Clone)]
pub struct AppState {
    pub short_urls: Arc<ShortUrlService>,
}

impl AppState {
    pub fn new(short_urls: Arc<ShortUrlService>) -> Self {
        Self { short_urls }
    }
}
