//! Application layer services implementing business logic.
//!
//! Services coordinate validation and registry calls and give HTTP handlers a
//! small API to call.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short URL creation and resolution
//! - [`services::url_validator::UrlValidator`] - Syntax, scheme and DNS checks for submitted URLs

pub mod services;
