//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::CatalogConfig;
use crate::core::service::RecordSource;
use crate::storage::RecordStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the catalog HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(CatalogConfig::from_yaml_file("browser.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: CatalogConfig,
    source: Option<Box<dyn RecordSource>>,
    store: Option<RecordStore>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default_config(),
            source: None,
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the configuration
    ///
    /// Unless a source or store is given explicitly, the record source is
    /// built from `config.source`.
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch records from this source instead of the configured one
    pub fn with_source(mut self, source: impl RecordSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Serve an already loaded store (skips the startup fetch)
    pub fn with_store(mut self, store: RecordStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Performs the single startup load. A failed load still yields a host,
    /// in the failed state; only invalid configuration is an error here.
    pub async fn build_host(&mut self) -> Result<ServerHost> {
        let config = self.config.clone();

        if let Some(store) = self.store.take() {
            return Ok(ServerHost::from_store(config, store)?);
        }

        let source = match self.source.take() {
            Some(source) => source,
            None => config.source.build()?,
        };
        Ok(ServerHost::load(config, &*source).await?)
    }

    /// Build the final router
    pub async fn build(mut self) -> Result<Router> {
        let host = Arc::new(self.build_host().await?);
        Ok(RestExposure::build_router(host, self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Load the records
    /// - Bind to `config.bind`
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind.clone();
        let app = self.build().await?;
        let listener = TcpListener::bind(&addr).await?;

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

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
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
