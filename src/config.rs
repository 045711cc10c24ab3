//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Bind Address
//!
//! ### Method 1: Full address
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! ```
//!
//! ### Method 2: Individual components (what most hosting platforms set)
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! ```
//!
//! If `LISTEN` is not set, it is built from `HOST` (default `0.0.0.0`) and
//! `PORT` (default `3000`).
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RESOLVE_TIMEOUT_SECS` - DNS lookup timeout for submitted URLs (default: 5, range: 1-60)
//! - `VIEWS_DIR` - Directory containing `index.html` (default: `views`)
//! - `PUBLIC_DIR` - Directory served under `/public` (default: `public`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on one hostname lookup, in seconds. A lookup that takes
    /// longer rejects the URL.
    pub resolve_timeout_secs: u64,
    pub views_dir: String,
    pub public_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESOLVE_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let resolve_timeout_secs = match env::var("RESOLVE_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("RESOLVE_TIMEOUT_SECS must be a number, got '{}'", v))?,
            Err(_) => 5,
        };

        let views_dir = env::var("VIEWS_DIR").unwrap_or_else(|_| "views".to_string());
        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            resolve_timeout_secs,
            views_dir,
            public_dir,
        })
    }

    /// Loads the bind address with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. Constructed from `HOST` and `PORT`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        format!("{}:{}", host, port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port` with a numeric port
    /// - `resolve_timeout_secs` is outside 1..=60
    /// - `views_dir` or `public_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let Some((_, port)) = self.listen_addr.rsplit_once(':') else {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        };

        if port.parse::<u16>().is_err() {
            anyhow::bail!("Port must be a number between 0 and 65535, got '{}'", port);
        }

        if self.resolve_timeout_secs == 0 || self.resolve_timeout_secs > 60 {
            anyhow::bail!(
                "RESOLVE_TIMEOUT_SECS must be between 1 and 60, got {}",
                self.resolve_timeout_secs
            );
        }

        if self.views_dir.is_empty() {
            anyhow::bail!("VIEWS_DIR must not be empty");
        }
        if self.public_dir.is_empty() {
            anyhow::bail!("PUBLIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Returns the DNS lookup timeout as a [`Duration`].
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Resolve timeout: {}s", self.resolve_timeout_secs);
        tracing::info!(
            "  Views: {}, public assets: {}",
            self.views_dir,
            self.public_dir
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
