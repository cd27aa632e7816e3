// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use social_core::{kernel::EntityStore, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,social_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting social graph API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(max_depth = config.graphql_max_depth, "Configuration loaded");

    // Seed the store
    let store = Arc::new(EntityStore::seeded());
    tracing::info!("Entity store seeded with member types");

    // Build application
    let app = build_app(store, &config);

    // Start server
    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
