//! Connect Network Use Case
//!
//! Builds the provider for a network at point of use and checks that the node
//! it reaches serves the expected chain.

use std::sync::Arc;

use crate::domain::gateways::{NodeConnector, Provider};
use crate::domain::models::network::{Connectivity, NetworkConnection};
use crate::domain::models::registry::NetworkRegistry;
use crate::shared::errors::UseCaseError;

/// Caller choices for a connection attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectOptions {
    /// Required to connect to a production network
    pub confirm_production: bool,
}

/// Use case for connecting to a network
pub struct ConnectNetworkUseCase {
    registry: Arc<NetworkRegistry>,
    node_connector: Arc<dyn NodeConnector>,
}

impl ConnectNetworkUseCase {
    /// Create a new ConnectNetworkUseCase
    #[must_use]
    pub fn new(registry: Arc<NetworkRegistry>, node_connector: Arc<dyn NodeConnector>) -> Self {
        Self {
            registry,
            node_connector,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the network doesn't exist.
    /// Returns `UseCaseError::Forbidden` for a production network without confirmation.
    /// Returns `UseCaseError::Provider` if the provider cannot be built or the node cannot be queried.
    /// Returns `UseCaseError::NetworkMismatch` if the node serves a different network id.
    pub async fn execute(&self, name: &str, options: ConnectOptions) -> Result<NetworkConnection, UseCaseError> {
        tracing::info!(network = %name, "Connecting to network");

        let network = self.registry.get(name).map_err(|_| {
            tracing::warn!(network = %name, "Network not found");
            UseCaseError::NotFound {
                resource: "Network".to_string(),
                id: name.to_string(),
            }
        })?;

        if network.production() && !options.confirm_production {
            tracing::warn!(network = %name, "Production network requires confirmation");
            return Err(UseCaseError::Forbidden(format!(
                "Network '{name}' is a production network; confirmation is required"
            )));
        }

        let provider: Arc<dyn Provider> = match network.connectivity() {
            Connectivity::Direct { host, port } => self.node_connector.connect(host, *port)?,
            Connectivity::Provider(factory) => factory.create()?,
        };

        let reported = provider.network_version().await?;
        if !network.network_id().matches(&reported) {
            tracing::warn!(
                network = %name,
                expected = %network.network_id(),
                reported = %reported,
                "Node serves a different network"
            );
            return Err(UseCaseError::NetworkMismatch {
                network: name.to_string(),
                expected: network.network_id().to_string(),
                reported,
            });
        }

        tracing::info!(network = %name, endpoint = %provider.endpoint(), "Connected to network");

        Ok(NetworkConnection {
            network: name.to_string(),
            endpoint: provider.endpoint().to_string(),
            signer: provider.signer(),
            reported_network_id: reported,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::SignerKind;
    use crate::domain::models::network::{NetworkConfig, NetworkId, NewNetworkData};
    use crate::shared::errors::ProviderError;
    use crate::testing::{StubNodeConnector, StubProviderFactory};

    fn development() -> NetworkConfig {
        NetworkConfig::new(
            "development",
            NewNetworkData {
                host: Some("127.0.0.1".to_string()),
                port: Some(7545),
                network_id: Some(NetworkId::Any),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn remote(name: &str, id: u64, factory: Arc<StubProviderFactory>) -> NetworkConfig {
        NetworkConfig::new(
            name,
            NewNetworkData {
                network_id: Some(NetworkId::Id(id)),
                provider: Some(factory),
                production: true,
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn use_case(networks: Vec<NetworkConfig>) -> ConnectNetworkUseCase {
        ConnectNetworkUseCase::new(
            Arc::new(NetworkRegistry::new(networks).unwrap()),
            Arc::new(StubNodeConnector {
                reported_network_id: "5777".to_string(),
            }),
        )
    }

    const CONFIRMED: ConnectOptions = ConnectOptions {
        confirm_production: true,
    };

    #[tokio::test]
    async fn should_connect_to_local_node() {
        let use_case = use_case(vec![development()]);

        let connection = use_case.execute("development", ConnectOptions::default()).await.unwrap();

        assert_eq!(connection.endpoint, "http://127.0.0.1:7545");
        assert_eq!(connection.signer, SignerKind::Node);
        assert_eq!(connection.reported_network_id, "5777");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_network() {
        let use_case = use_case(vec![development()]);

        let result = use_case.execute("nonexistent-network", CONFIRMED).await;
        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn should_refuse_unconfirmed_production_network_without_building_provider() {
        let factory = Arc::new(StubProviderFactory::new("88"));
        let use_case = use_case(vec![remote("tomotestnet", 88, factory.clone())]);

        let result = use_case.execute("tomotestnet", ConnectOptions::default()).await;

        assert!(matches!(result, Err(UseCaseError::Forbidden(_))));
        assert_eq!(factory.invocations(), 0);
    }

    #[tokio::test]
    async fn should_build_provider_only_for_selected_network() {
        let testnet = Arc::new(StubProviderFactory::new("88"));
        let mainnet = Arc::new(StubProviderFactory::new("89"));
        let use_case = use_case(vec![
            remote("tomotestnet", 88, testnet.clone()),
            remote("tomomainnet", 89, mainnet.clone()),
        ]);

        let connection = use_case.execute("tomotestnet", CONFIRMED).await.unwrap();

        assert_eq!(connection.reported_network_id, "88");
        assert_eq!(connection.signer, SignerKind::Mnemonic);
        assert_eq!(testnet.invocations(), 1);
        assert_eq!(mainnet.invocations(), 0);
    }

    #[tokio::test]
    async fn should_surface_missing_secret_then_succeed_on_retry() {
        let factory = Arc::new(StubProviderFactory::new("88").failing_once(ProviderError::MissingSecret {
            variable: "MNEMONIC".to_string(),
        }));
        let use_case = use_case(vec![remote("tomotestnet", 88, factory.clone())]);

        let first = use_case.execute("tomotestnet", CONFIRMED).await;
        assert!(matches!(
            first,
            Err(UseCaseError::Provider(ProviderError::MissingSecret { .. }))
        ));

        let second = use_case.execute("tomotestnet", CONFIRMED).await;
        assert!(second.is_ok());
        assert_eq!(factory.invocations(), 2);
    }

    #[tokio::test]
    async fn should_reject_node_serving_another_network() {
        let factory = Arc::new(StubProviderFactory::new("89"));
        let use_case = use_case(vec![remote("tomotestnet", 88, factory)]);

        let result = use_case.execute("tomotestnet", CONFIRMED).await;

        match result {
            Err(UseCaseError::NetworkMismatch {
                expected, reported, ..
            }) => {
                assert_eq!(expected, "88");
                assert_eq!(reported, "89");
            }
            other => panic!("expected network mismatch, got {other:?}"),
        }
    }
}
