//! Provider Gateways
//!
//! Abstract traits for JSON-RPC providers and the deferred factories that build them.
//! Factories are stored in the registry and only invoked once a network is selected.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::shared::errors::ProviderError;

/// Kind of signing material a provider carries. Never exposes the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignerKind {
    /// Accounts are managed by the node (local development chains)
    Node,
    /// Accounts derived from a mnemonic phrase
    Mnemonic,
    /// A single raw private key
    PrivateKey,
}

impl std::fmt::Display for SignerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Mnemonic => write!(f, "mnemonic"),
            Self::PrivateKey => write!(f, "private_key"),
        }
    }
}

/// A connection to a blockchain node mediating RPC calls
#[async_trait]
pub trait Provider: Send + Sync {
    /// The RPC endpoint this provider talks to
    fn endpoint(&self) -> &str;

    /// The kind of signer attached to this provider
    fn signer(&self) -> SignerKind;

    /// Query the node's network id (`net_version`)
    async fn network_version(&self) -> Result<String, ProviderError>;
}

/// Zero-argument constructor for a provider, invoked at point of use
pub trait ProviderFactory: Send + Sync {
    /// The RPC endpoint the built provider will use
    fn endpoint(&self) -> &str;

    /// The kind of signer the built provider will carry
    fn signer(&self) -> SignerKind;

    /// Build the provider, reading any secrets it needs
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingSecret` if the secret is not available,
    /// `ProviderError::InvalidSecret` or `ProviderError::InvalidEndpoint` if it is malformed.
    fn create(&self) -> Result<Arc<dyn Provider>, ProviderError>;
}

/// Builds providers for networks reached directly through a host and port
pub trait NodeConnector: Send + Sync {
    /// Connect to a locally-run node
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidEndpoint` if host and port do not form a valid URL.
    fn connect(&self, host: &str, port: u16) -> Result<Arc<dyn Provider>, ProviderError>;
}
