//! HTTP server initialization and runtime setup.
//!
//! Wires the registry, resolver and services together and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::{ShortUrlService, UrlValidator};
use crate::config::Config;
use crate::domain::repositories::UrlRegistry;
use crate::infrastructure::dns::{HostResolver, SystemResolver};
use crate::infrastructure::memory::InMemoryRegistry;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::StaticAssets;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state used in production.
///
/// A new, empty registry is created on every call.
pub fn build_state(config: &Config) -> AppState {
    let registry: Arc<dyn UrlRegistry> = Arc::new(InMemoryRegistry::new());
    let resolver: Arc<dyn HostResolver> = Arc::new(SystemResolver::new());
    let validator = UrlValidator::new(resolver, config.resolve_timeout());

    AppState::new(Arc::new(ShortUrlService::new(registry, validator)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory URL registry
/// - System DNS resolver with the configured timeout
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("URL registry initialized (in-memory)");

    let app = app_router(state, &StaticAssets::from_config(&config));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped; registered URLs discarded");

    Ok(())
}

/// Completes on Ctrl-C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
