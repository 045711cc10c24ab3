//! # shorturl
//!
//! A small URL shortening microservice built with Axum.
//!
//! Submitted URLs are checked (syntax, `http`/`https` scheme, resolvable host)
//! and assigned sequential integer identifiers starting at 1. The same URL
//! always gets the same identifier. Everything is kept in memory and is lost
//! on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the registry trait
//! - **Application Layer** ([`application`]) - URL validation and the short URL service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and DNS resolvers
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Landing page and static assets
//!
//! ## API
//!
//! ```text
//! POST /api/shorturl          url=https://example.com
//!   -> {"original_url":"https://example.com","short_url":1}
//! GET  /api/shorturl/1
//!   -> 302 Found, Location: https://example.com
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortUrlService, UrlValidator};
    pub use crate::domain::entities::{ShortId, UrlRecord};
    pub use crate::domain::repositories::UrlRegistry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::dns::{HostResolver, StaticResolver, SystemResolver};
    pub use crate::infrastructure::memory::InMemoryRegistry;
    pub use crate::state::AppState;
    pub use crate::web::StaticAssets;
}
