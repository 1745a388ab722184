//! Network Domain Model
//!
//! Represents a single deployment target in the registry.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::gateways::provider::{ProviderFactory, SignerKind};
use crate::shared::errors::DomainError;

/// Longest accepted network name
pub const MAX_NETWORK_NAME_LEN: usize = 64;

/// Network names are non-empty ASCII letters, digits, `-` and `_`, so every
/// declared network is addressable as a URL path segment
#[must_use]
pub fn is_valid_network_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NETWORK_NAME_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Chain identifier a network entry targets. `Any` is written as `"*"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkId {
    Any,
    Id(u64),
}

impl NetworkId {
    /// Whether a network id reported by a node satisfies this one
    #[must_use]
    pub fn matches(&self, reported: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(expected) => reported.trim().parse::<u64>().is_ok_and(|id| id == *expected),
        }
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "*"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for NetworkId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value == "*" {
            return Ok(Self::Any);
        }
        value
            .parse::<u64>()
            .map(Self::Id)
            .map_err(|_| DomainError::InvalidNetworkId(value.to_string()))
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Id(id) => serializer.serialize_u64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(id) => Ok(Self::Id(id)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// How a network is reached: a local node, or a deferred provider factory
#[derive(Clone)]
pub enum Connectivity {
    Direct { host: String, port: u16 },
    Provider(Arc<dyn ProviderFactory>),
}

impl std::fmt::Debug for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct { host, port } => f
                .debug_struct("Direct")
                .field("host", host)
                .field("port", port)
                .finish(),
            Self::Provider(factory) => f
                .debug_struct("Provider")
                .field("endpoint", &factory.endpoint())
                .field("signer", &factory.signer())
                .finish(),
        }
    }
}

/// Data required to declare a network
#[derive(Clone, Default)]
pub struct NewNetworkData {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub network_id: Option<NetworkId>,
    pub provider: Option<Arc<dyn ProviderFactory>>,
    pub production: bool,
}

/// A single deployment target
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    name: String,
    connectivity: Connectivity,
    network_id: NetworkId,
    production: bool,
}

impl NetworkConfig {
    /// Declare a network, checking that exactly one connectivity source is given
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidNetworkName` for a name outside [`is_valid_network_name`],
    /// `DomainError::ConflictingConnectivity` if both host/port and a provider are given,
    /// `DomainError::MissingConnectivity` if neither is, and
    /// `DomainError::IncompleteEndpoint` if only one of host and port is.
    pub fn new(name: impl Into<String>, data: NewNetworkData) -> Result<Self, DomainError> {
        let name = name.into();
        if !is_valid_network_name(&name) {
            return Err(DomainError::InvalidNetworkName(name));
        }

        let connectivity = match (data.host, data.port, data.provider) {
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => {
                return Err(DomainError::ConflictingConnectivity(name));
            }
            (None, None, None) => return Err(DomainError::MissingConnectivity(name)),
            (Some(host), Some(port), None) => Connectivity::Direct { host, port },
            (None, None, Some(factory)) => Connectivity::Provider(factory),
            (Some(_), None, None) | (None, Some(_), None) => {
                return Err(DomainError::IncompleteEndpoint(name));
            }
        };

        Ok(Self {
            name,
            connectivity,
            network_id: data.network_id.unwrap_or(NetworkId::Any),
            production: data.production,
        })
    }

    // Getters

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        match &self.connectivity {
            Connectivity::Direct { host, .. } => Some(host),
            Connectivity::Provider(_) => None,
        }
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        match &self.connectivity {
            Connectivity::Direct { port, .. } => Some(*port),
            Connectivity::Provider(_) => None,
        }
    }

    #[must_use]
    pub fn provider(&self) -> Option<&Arc<dyn ProviderFactory>> {
        match &self.connectivity {
            Connectivity::Provider(factory) => Some(factory),
            Connectivity::Direct { .. } => None,
        }
    }

    #[must_use]
    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    #[must_use]
    pub fn production(&self) -> bool {
        self.production
    }
}

/// Outcome of connecting to a network: the provider that was built and what the node reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConnection {
    pub network: String,
    pub endpoint: String,
    pub signer: SignerKind,
    pub reported_network_id: String,
}
