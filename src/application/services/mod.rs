//! Business logic services for the application layer.

pub mod short_url_service;
pub mod url_validator;

pub use short_url_service::ShortUrlService;
pub use url_validator::{UrlRejection, UrlValidator, ValidHost};
