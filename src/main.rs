//! Deployment Network Registry - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deploy_network_registry::infrastructure::driven_adapters::config::AppConfig;
use deploy_network_registry::infrastructure::driven_adapters::{EnvSecretSource, HttpNodeConnector};
use deploy_network_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deploy_network_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Build the registry once; provider secrets are read only when a network is connected
    let registry = Arc::new(config.build_registry(Arc::new(EnvSecretSource))?);
    let names: Vec<&str> = registry.names().collect();
    tracing::info!(count = registry.len(), networks = ?names, "Network registry ready");

    let node_connector = Arc::new(HttpNodeConnector::new(config.rpc.timeout()));
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = AppState::new(Arc::new(config), registry, node_connector);
    let app = build_router(app_state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
