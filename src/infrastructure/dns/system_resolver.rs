//! Resolver backed by the operating system's name lookup.

use super::service::{HostResolver, ResolveError, ResolveResult};
use async_trait::async_trait;
use std::net::IpAddr;
use tracing::debug;

/// Resolves hostnames with [`tokio::net::lookup_host`].
///
/// This goes through the platform resolver (`getaddrinfo` on Unix), so
/// `/etc/hosts` entries and IP literals are honoured exactly as for any other
/// program on the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> ResolveResult<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::LookupFailed {
                host: host.to_string(),
                reason: e.to_string(),
            })?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(ResolveError::NoAddresses(host.to_string()));
        }

        debug!("Resolved {} to {:?}", host, addrs);
        Ok(addrs)
    }
}
