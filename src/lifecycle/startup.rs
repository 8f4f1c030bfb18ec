//! Startup orchestration.
//!
//! # Responsibilities
//! - Open the configured store (SQLite or in-memory)
//! - Start the metrics exporter when enabled
//! - Bind the listener and serve until shutdown

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::product::{InMemoryProductStore, SqliteProductStore, StoreError};

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the service until a shutdown signal arrives.
pub async fn run(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.database.is_memory() {
        tracing::warn!("Using in-memory store; data is lost on exit");
        let server = HttpServer::new(config, InMemoryProductStore::new());
        server.run(listener, shutdown.subscribe()).await?;
    } else {
        let store = SqliteProductStore::connect(&config.database).await?;
        if config.database.create_schema {
            store.ensure_schema().await?;
        }
        let server = HttpServer::new(config, store);
        server.run(listener, shutdown.subscribe()).await?;
    }

    Ok(())
}
