//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::ServiceConfig;
use crate::core::auth::{AuthProvider, StaticTokenProvider};
use crate::core::service::ContaService;
use crate::storage::InMemoryContaService;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the contas HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_service(InMemoryContaService::new())
///     .with_api_token("masterkey")
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn ContaService>>,
    auth: Option<Arc<dyn AuthProvider>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            auth: None,
        }
    }

    /// Build from configuration: in-memory store seeded from `config.seed`,
    /// static token from `config.api_token`
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let service = InMemoryContaService::seeded(config.seed.iter().cloned())
            .context("failed to seed store")?;
        tracing::debug!(records = service.len()?, "store seeded");

        Ok(Self::new()
            .with_service(service)
            .with_api_token(config.api_token.clone()))
    }

    /// Set the record store (required)
    pub fn with_service(mut self, service: impl ContaService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set the auth provider (required)
    pub fn with_auth_provider(mut self, auth: impl AuthProvider + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Shorthand for a static shared-token provider
    pub fn with_api_token(self, token: impl Into<String>) -> Self {
        self.with_auth_provider(StaticTokenProvider::new(token))
    }

    /// Build the transport-agnostic host
    pub fn build_host(self) -> Result<ServerHost> {
        let service = self
            .service
            .ok_or_else(|| anyhow::anyhow!("ContaService is required. Call .with_service()"))?;
        let auth = self.auth.ok_or_else(|| {
            anyhow::anyhow!("AuthProvider is required. Call .with_api_token() or .with_auth_provider()")
        })?;

        Ok(ServerHost::new(service, auth))
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
