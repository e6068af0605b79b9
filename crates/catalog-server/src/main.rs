//! Catalog HTTP Server
//!
//! Serves category filter schemas and builds listing queries from URL state.

use anyhow::Result;
use catalog_sdk::Catalog;
use catalog_server::{api, config::ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = ServerConfig::load()?;

    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    let catalog = Catalog::new(config.catalog.clone())?;
    info!(
        "Catalog initialized with {} categories",
        catalog.registry().len()
    );

    let app = api::create_router(Arc::new(catalog));

    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Categories: http://{}/v1/categories", addr);
    info!("  Listing query: http://{}/v1/products/query?category=cis", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "catalog_server={level},catalog_sdk={level},catalog_registry={level},tower_http=debug"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
