//! Resolver answering from a fixed host table.

use super::service::{HostResolver, ResolveError, ResolveResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// A resolver that never touches the network.
///
/// Hosts are matched case-insensitively. IP literals always resolve to
/// themselves; anything else not in the table fails.
///
/// # Use Cases
///
/// - Integration tests that must not depend on public DNS
/// - Running the service on an offline machine
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, IpAddr>,
}

impl StaticResolver {
    /// Creates a resolver with an empty host table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `host` to the table, resolving to `addr`.
    pub fn with_host(mut self, host: impl Into<String>, addr: IpAddr) -> Self {
        self.hosts.insert(host.into().to_ascii_lowercase(), addr);
        self
    }

    /// Adds each host in `hosts`, all resolving to `127.0.0.1`.
    pub fn with_hosts<I, S>(self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        hosts.into_iter().fold(self, |resolver, host| {
            resolver.with_host(host, IpAddr::V4(Ipv4Addr::LOCALHOST))
        })
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> ResolveResult<Vec<IpAddr>> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        match self.hosts.get(&host.to_ascii_lowercase()) {
            Some(addr) => Ok(vec![*addr]),
            None => {
                debug!("Static lookup miss for {}", host);
                Err(ResolveError::LookupFailed {
                    host: host.to_string(),
                    reason: "host not in static table".to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_host_resolves() {
        let resolver = StaticResolver::new().with_hosts(["example.com"]);

        let addrs = resolver.resolve("example.com").await.unwrap();
        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let resolver = StaticResolver::new().with_hosts(["Example.COM"]);

        assert!(resolver.resolve("example.com").await.is_ok());
        assert!(resolver.resolve("EXAMPLE.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_host_fails() {
        let resolver = StaticResolver::new().with_hosts(["example.com"]);

        let err = resolver.resolve("other.com").await.unwrap_err();
        assert!(matches!(err, ResolveError::LookupFailed { .. }));
    }

    #[tokio::test]
    async fn test_ip_literal_resolves_to_itself() {
        let resolver = StaticResolver::new();
        let ip: IpAddr = "10.1.2.3".parse().unwrap();

        assert_eq!(resolver.resolve("10.1.2.3").await.unwrap(), vec![ip]);
    }

    #[tokio::test]
    async fn test_custom_address() {
        let ip: IpAddr = "93.184.216.34".parse().unwrap();
        let resolver = StaticResolver::new().with_host("example.com", ip);

        assert_eq!(resolver.resolve("example.com").await.unwrap(), vec![ip]);
    }
}
