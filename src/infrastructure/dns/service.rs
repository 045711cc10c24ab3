//! Host resolver trait and error types.

use async_trait::async_trait;
use std::net::IpAddr;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup of {host} failed: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("no addresses found for {0}")]
    NoAddresses(String),
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Trait for checking that a hostname resolves to at least one address.
///
/// Implementations may block on network I/O for an unbounded time; callers
/// are expected to apply their own timeout.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - Operating system resolver via tokio
/// - [`crate::infrastructure::dns::StaticResolver`] - Fixed host table, for tests and offline runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to its addresses.
    ///
    /// `host` is a bare domain name or IP literal, without port or brackets.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::LookupFailed`] when the lookup itself fails and
    /// [`ResolveError::NoAddresses`] when it succeeds with an empty answer.
    async fn resolve(&self, host: &str) -> ResolveResult<Vec<IpAddr>>;
}
