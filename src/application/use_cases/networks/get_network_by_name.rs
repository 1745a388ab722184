//! Get Network By Name Use Case
//!
//! Retrieves a single network by its registry key.

use std::sync::Arc;

use crate::domain::models::network::NetworkConfig;
use crate::domain::models::registry::NetworkRegistry;
use crate::shared::errors::UseCaseError;

/// Use case for getting a network by name
pub struct GetNetworkByNameUseCase {
    registry: Arc<NetworkRegistry>,
}

impl GetNetworkByNameUseCase {
    /// Create a new GetNetworkByNameUseCase
    #[must_use]
    pub fn new(registry: Arc<NetworkRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the network doesn't exist.
    pub fn execute(&self, name: &str) -> Result<NetworkConfig, UseCaseError> {
        tracing::debug!(network = %name, "Getting network by name");

        let network = self.registry.get(name).map_err(|_| {
            tracing::warn!(network = %name, "Network not found");
            UseCaseError::NotFound {
                resource: "Network".to_string(),
                id: name.to_string(),
            }
        })?;

        Ok(network.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::{NetworkId, NewNetworkData};

    fn registry() -> Arc<NetworkRegistry> {
        let development = NetworkConfig::new(
            "development",
            NewNetworkData {
                host: Some("127.0.0.1".to_string()),
                port: Some(7545),
                network_id: Some(NetworkId::Any),
                ..Default::default()
            },
        )
        .unwrap();
        Arc::new(NetworkRegistry::new([development]).unwrap())
    }

    #[test]
    fn should_return_network_when_found() {
        let use_case = GetNetworkByNameUseCase::new(registry());

        let network = use_case.execute("development").unwrap();
        assert_eq!(network.host(), Some("127.0.0.1"));
        assert_eq!(network.port(), Some(7545));
    }

    #[test]
    fn should_return_not_found_when_network_does_not_exist() {
        let use_case = GetNetworkByNameUseCase::new(registry());

        let result = use_case.execute("nonexistent-network");
        assert!(matches!(
            result,
            Err(UseCaseError::NotFound { ref id, .. }) if id == "nonexistent-network"
        ));
    }

    #[test]
    fn should_return_identical_records_on_repeated_calls() {
        let use_case = GetNetworkByNameUseCase::new(registry());

        let first = use_case.execute("development").unwrap();
        let second = use_case.execute("development").unwrap();
        assert_eq!(first.host(), second.host());
        assert_eq!(first.port(), second.port());
        assert_eq!(first.network_id(), second.network_id());
        assert_eq!(first.production(), second.production());
    }
}
