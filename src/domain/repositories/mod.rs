//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the storage behind short URL registration. Concrete
//! implementations live in `crate::infrastructure`, and mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRegistry`] - Identifier allocation, deduplication and lookup

pub mod url_registry;

pub use url_registry::UrlRegistry;

#[cfg(test)]
pub use url_registry::MockUrlRegistry;
