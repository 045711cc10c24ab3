#![allow(dead_code)]

use axum::Router;
use shorturl::application::services::{ShortUrlService, UrlValidator};
use shorturl::infrastructure::dns::{HostResolver, StaticResolver};
use shorturl::infrastructure::memory::InMemoryRegistry;
use shorturl::routes::build_router;
use shorturl::state::AppState;
use shorturl::web::StaticAssets;
use std::sync::Arc;
use std::time::Duration;

/// Hosts the test resolver answers for. Everything else fails to resolve.
pub const RESOLVABLE_HOSTS: [&str; 4] = [
    "example.com",
    "www.example.com",
    "example.org",
    "freecodecamp.org",
];

pub fn test_resolver() -> StaticResolver {
    StaticResolver::new().with_hosts(RESOLVABLE_HOSTS)
}

pub fn create_state_with_resolver(resolver: Arc<dyn HostResolver>, timeout: Duration) -> AppState {
    let registry = Arc::new(InMemoryRegistry::new());
    let validator = UrlValidator::new(resolver, timeout);

    AppState::new(Arc::new(ShortUrlService::new(registry, validator)))
}

/// Fresh state with an empty registry and an offline resolver.
pub fn create_test_state() -> AppState {
    create_state_with_resolver(Arc::new(test_resolver()), Duration::from_secs(5))
}

/// Full application router over `state`, serving assets from the repository root.
pub fn create_test_app(state: AppState) -> Router {
    build_router(state, &StaticAssets::default())
}
