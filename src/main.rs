//! Product CRUD service.
//!
//! A REST service for a single "product" resource, built with Tokio, Axum
//! and SQLite.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ metrics ─▶ timeout/limit ─▶ request context
//!                                                                             │
//!                                                                             ▼
//!                                                                     http::handlers
//!                                                                             │
//!                           ┌─────────────────────────────────────────────────┤
//!                           ▼                                                 ▼
//!                  product::validation ─▶ product::service ─▶ product::mapper ─▶ product::store
//!                                                 │                                    (SQLite)
//!                                                 ▼ on failure
//!                                          http::error ─▶ ErrorResponse { ..., path }
//! ```

use clap::Parser;
use std::path::PathBuf;

use product_service::config::load_or_default;
use product_service::lifecycle::{startup, Shutdown};
use product_service::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "product-service")]
#[command(about = "REST service for products", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "product-service.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(&cli.config)?;
    init_logging(&config.observability);

    tracing::info!("product-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        path = %cli.config.display(),
        bind_address = %config.listener.bind_address,
        database = %config.database.url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
