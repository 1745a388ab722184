//! Network Registry
//!
//! Immutable mapping from network name to its configuration. Built once at startup
//! and shared read-only for the life of the process.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::domain::models::network::{NetworkConfig, NetworkId};
use crate::shared::errors::DomainError;

/// Read-only registry of deployment targets, ordered by name
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    networks: BTreeMap<String, NetworkConfig>,
}

impl NetworkRegistry {
    /// Build the registry from declared networks
    ///
    /// Provider factories are stored, never invoked, so missing secrets do not fail here.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateNetwork` if two entries share a name.
    pub fn new(networks: impl IntoIterator<Item = NetworkConfig>) -> Result<Self, DomainError> {
        let mut by_name = BTreeMap::new();
        for network in networks {
            match by_name.entry(network.name().to_string()) {
                Entry::Occupied(entry) => return Err(DomainError::DuplicateNetwork(entry.key().clone())),
                Entry::Vacant(entry) => {
                    entry.insert(network);
                }
            }
        }

        let registry = Self { networks: by_name };
        registry.warn_shared_network_ids();
        tracing::debug!(count = registry.len(), "Network registry built");
        Ok(registry)
    }

    /// Get a network by name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NetworkNotFound` if no network has that name.
    pub fn get(&self, name: &str) -> Result<&NetworkConfig, DomainError> {
        self.networks
            .get(name)
            .ok_or_else(|| DomainError::NetworkNotFound(name.to_string()))
    }

    /// Network names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Networks in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.networks.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    // Network ids are advisory; entries sharing one are allowed but worth a warning.
    fn warn_shared_network_ids(&self) {
        let mut seen: HashMap<NetworkId, &str> = HashMap::new();
        for network in self.iter() {
            let id = network.network_id();
            if id == NetworkId::Any {
                continue;
            }
            if let Some(first) = seen.insert(id, network.name()) {
                tracing::warn!(
                    network_id = %id,
                    first = first,
                    second = network.name(),
                    "Networks share a network id"
                );
            }
        }
    }
}
