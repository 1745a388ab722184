//! Domain Layer
//!
//! Contains the network registry, its value objects, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{NodeConnector, Provider, ProviderFactory, SecretSource, SignerKind};
pub use models::{Connectivity, NetworkConfig, NetworkConnection, NetworkId, NetworkRegistry, NewNetworkData};
