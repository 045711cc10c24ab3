//! Acceptance checks for URLs submitted for shortening.
//!
//! A URL is accepted when it:
//!
//! 1. Is non-empty
//! 2. Parses as an absolute URL (WHATWG URL syntax, via the `url` crate)
//! 3. Uses the `http` or `https` scheme
//! 4. Has a host that resolves within the configured timeout
//!
//! The submitted string is never rewritten. What the caller sent is what gets
//! registered and what the redirect later points at.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::{Host, Url};

use crate::infrastructure::dns::{HostResolver, ResolveError};

/// Reasons a submitted URL is refused.
///
/// Clients only ever see `"invalid url"`; the variants exist for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum UrlRejection {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    Malformed(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got {0:?}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Host {host} did not resolve: {source}")]
    Unresolvable {
        host: String,
        #[source]
        source: ResolveError,
    },

    #[error("Lookup of {host} timed out after {timeout:?}")]
    Timeout { host: String, timeout: Duration },
}

/// A URL that passed every check, with the host that was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidHost {
    /// The submitted string, unmodified.
    pub url: String,
    /// Bare hostname or IP literal (no brackets, no port).
    pub host: String,
}

/// Performs the syntactic checks and extracts the host to resolve.
///
/// # Errors
///
/// Returns [`UrlRejection::Empty`], [`UrlRejection::Malformed`],
/// [`UrlRejection::UnsupportedScheme`] or [`UrlRejection::MissingHost`].
pub fn extract_http_host(input: &str) -> Result<String, UrlRejection> {
    if input.is_empty() {
        return Err(UrlRejection::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlRejection::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlRejection::UnsupportedScheme(other.to_string())),
    }

    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        _ => Err(UrlRejection::MissingHost),
    }
}

/// Validates URLs, including a bounded name-resolution check on the host.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    resolve_timeout: Duration,
}

impl UrlValidator {
    /// Creates a validator that gives each lookup at most `resolve_timeout`.
    pub fn new(resolver: Arc<dyn HostResolver>, resolve_timeout: Duration) -> Self {
        Self {
            resolver,
            resolve_timeout,
        }
    }

    /// Checks `input` and returns it with its host on success.
    ///
    /// A lookup that outlives the timeout is dropped and reported as
    /// [`UrlRejection::Timeout`], which callers treat like any other failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`UrlRejection`] encountered.
    pub async fn validate(&self, input: &str) -> Result<ValidHost, UrlRejection> {
        let host = extract_http_host(input)?;

        let lookup = tokio::time::timeout(self.resolve_timeout, self.resolver.resolve(&host)).await;

        match lookup {
            Ok(Ok(addrs)) => {
                debug!("Host {} resolved to {} address(es)", host, addrs.len());
                Ok(ValidHost {
                    url: input.to_string(),
                    host,
                })
            }
            Ok(Err(source)) => Err(UrlRejection::Unresolvable { host, source }),
            Err(_) => Err(UrlRejection::Timeout {
                host,
                timeout: self.resolve_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dns::{MockHostResolver, ResolveResult};
    use async_trait::async_trait;
    use std::net::{IpAddr, Ipv4Addr};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn loopback() -> Vec<IpAddr> {
        vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]
    }

    fn validator_with(resolver: MockHostResolver) -> UrlValidator {
        UrlValidator::new(Arc::new(resolver), TIMEOUT)
    }

    /// A resolver whose lookups never complete.
    struct StalledResolver;

    #[async_trait]
    impl HostResolver for StalledResolver {
        async fn resolve(&self, _host: &str) -> ResolveResult<Vec<IpAddr>> {
            std::future::pending::<ResolveResult<Vec<IpAddr>>>().await
        }
    }

    #[test]
    fn test_extract_host_http() {
        assert_eq!(
            extract_http_host("http://example.com").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_extract_host_https_with_port_and_path() {
        assert_eq!(
            extract_http_host("https://api.example.com:8443/v1?q=1#top").unwrap(),
            "api.example.com"
        );
    }

    #[test]
    fn test_extract_host_uppercase_scheme() {
        assert_eq!(
            extract_http_host("HTTPS://Example.com").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_extract_host_ip_literals() {
        assert_eq!(
            extract_http_host("http://192.168.1.1:8080/api").unwrap(),
            "192.168.1.1"
        );
        assert_eq!(extract_http_host("http://[::1]:3000/").unwrap(), "::1");
    }

    #[test]
    fn test_extract_host_empty() {
        assert!(matches!(extract_http_host(""), Err(UrlRejection::Empty)));
    }

    #[test]
    fn test_extract_host_malformed() {
        for input in ["not a valid url", "example.com", "//example.com", "/path", "http://"] {
            assert!(
                matches!(extract_http_host(input), Err(UrlRejection::Malformed(_))),
                "expected Malformed for {input:?}"
            );
        }
    }

    #[test]
    fn test_extract_host_unsupported_schemes() {
        for input in [
            "ftp://example.com",
            "file:///etc/passwd",
            "javascript:alert(1)",
            "mailto:someone@example.com",
            "data:text/plain,hello",
        ] {
            assert!(
                matches!(
                    extract_http_host(input),
                    Err(UrlRejection::UnsupportedScheme(_))
                ),
                "expected UnsupportedScheme for {input:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_validate_success_keeps_input_verbatim() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .withf(|host| host == "example.com")
            .times(1)
            .returning(|_| Ok(loopback()));

        let input = "HTTP://Example.com:80/Path#frag";
        let valid = validator_with(resolver).validate(input).await.unwrap();

        assert_eq!(valid.url, input);
        assert_eq!(valid.host, "example.com");
    }

    #[tokio::test]
    async fn test_validate_unresolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().times(1).returning(|host| {
            Err(ResolveError::LookupFailed {
                host: host.to_string(),
                reason: "NXDOMAIN".to_string(),
            })
        });

        let err = validator_with(resolver)
            .validate("http://thisdomaindoesnotexist.invalid")
            .await
            .unwrap_err();

        assert!(matches!(err, UrlRejection::Unresolvable { .. }));
    }

    #[tokio::test]
    async fn test_validate_skips_lookup_for_bad_scheme() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().times(0);

        let err = validator_with(resolver)
            .validate("ftp://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, UrlRejection::UnsupportedScheme(_)));
    }

    #[tokio::test]
    async fn test_validate_times_out() {
        let validator = UrlValidator::new(Arc::new(StalledResolver), Duration::from_millis(50));

        let err = validator
            .validate("http://slow.example.com")
            .await
            .unwrap_err();

        assert!(
            matches!(err, UrlRejection::Timeout { ref host, .. } if host == "slow.example.com")
        );
    }
}
