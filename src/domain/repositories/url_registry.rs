//! Registry trait for short identifier allocation and lookup.

use crate::domain::entities::{ShortId, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Authoritative mapping between original URLs and short identifiers.
///
/// Entries are only ever added. An implementation must keep the URL→id and
/// id→URL views consistent for every reader, and must allocate identifiers
/// densely starting at 1.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryRegistry`] - Process-local maps behind a lock
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRegistry: Send + Sync {
    /// Returns the record for `original_url`, allocating the next identifier
    /// if the URL has not been seen before.
    ///
    /// Concurrent calls with the same URL must all receive the same record and
    /// allocate exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the identifier space is exhausted.
    async fn create_or_get(&self, original_url: &str) -> Result<UrlRecord, AppError>;

    /// Finds the record previously registered for `original_url`.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record that was assigned `short_id`.
    async fn find_by_id(&self, short_id: ShortId) -> Result<Option<UrlRecord>, AppError>;

    /// Counts registered URLs.
    async fn count(&self) -> Result<usize, AppError>;
}
