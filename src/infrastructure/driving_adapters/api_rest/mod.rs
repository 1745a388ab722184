//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::networks::{
    ConnectNetworkUseCase, GetNetworkByNameUseCase, ListNetworksUseCase,
};
use crate::domain::gateways::NodeConnector;
use crate::domain::models::registry::NetworkRegistry;
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_networks_use_case: Arc<ListNetworksUseCase>,
    pub get_network_by_name_use_case: Arc<GetNetworkByNameUseCase>,
    pub connect_network_use_case: Arc<ConnectNetworkUseCase>,
}

impl AppState {
    /// Wire the use cases around a shared registry
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        registry: Arc<NetworkRegistry>,
        node_connector: Arc<dyn NodeConnector>,
    ) -> Self {
        Self {
            config,
            list_networks_use_case: Arc::new(ListNetworksUseCase::new(registry.clone())),
            get_network_by_name_use_case: Arc::new(GetNetworkByNameUseCase::new(registry.clone())),
            connect_network_use_case: Arc::new(ConnectNetworkUseCase::new(registry, node_connector)),
        }
    }
}

/// Build the application router with authentication and tracing layers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/networks", handlers::networks::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_config_extension,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id::request_id_middleware))
        .with_state(state)
}
