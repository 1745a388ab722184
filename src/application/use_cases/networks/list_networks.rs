//! List Networks Use Case
//!
//! Retrieves every network in the registry, sorted by name.

use std::sync::Arc;

use crate::domain::models::network::NetworkConfig;
use crate::domain::models::registry::NetworkRegistry;

/// Use case for listing all networks
pub struct ListNetworksUseCase {
    registry: Arc<NetworkRegistry>,
}

impl ListNetworksUseCase {
    /// Create a new ListNetworksUseCase
    #[must_use]
    pub fn new(registry: Arc<NetworkRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<NetworkConfig> {
        tracing::debug!("Listing networks");

        let networks: Vec<NetworkConfig> = self.registry.iter().cloned().collect();

        tracing::debug!(count = networks.len(), "Found networks");
        networks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::{NetworkId, NewNetworkData};

    fn direct(name: &str) -> NetworkConfig {
        NetworkConfig::new(
            name,
            NewNetworkData {
                host: Some("127.0.0.1".to_string()),
                port: Some(7545),
                network_id: Some(NetworkId::Any),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn should_return_empty_list_for_empty_registry() {
        let use_case = ListNetworksUseCase::new(Arc::new(NetworkRegistry::default()));
        assert!(use_case.execute().is_empty());
    }

    #[test]
    fn should_return_networks_sorted_by_name() {
        let registry = NetworkRegistry::new([direct("staging"), direct("development")]).unwrap();

        let use_case = ListNetworksUseCase::new(Arc::new(registry));
        let names: Vec<String> = use_case.execute().iter().map(|n| n.name().to_string()).collect();

        assert_eq!(names, vec!["development", "staging"]);
    }
}
