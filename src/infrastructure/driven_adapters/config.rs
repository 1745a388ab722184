//! Application Configuration
//!
//! Loads configuration from files and environment variables, and turns the
//! `[networks]` tables into the network registry.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use super::providers::{
    HdWalletProviderFactory, PrivateKeyProviderFactory, DEFAULT_MNEMONIC_ENV, DEFAULT_PRIVATE_KEY_ENV,
};
use crate::domain::gateways::{ProviderFactory, SecretSource};
use crate::domain::models::network::{NetworkConfig, NetworkId, NewNetworkData};
use crate::domain::models::registry::NetworkRegistry;
use crate::shared::errors::DomainError;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

/// JSON-RPC client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
    #[serde(default = "default_rpc_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_rpc_timeout_secs() -> u64 {
    30
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_rpc_timeout_secs(),
        }
    }
}

impl RpcConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Kind of provider a network is reached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    HdWallet,
    PrivateKey,
}

/// Provider declaration for a network
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub url: String,
    /// Environment variable holding the secret; defaults per kind
    pub secret_env: Option<String>,
}

impl ProviderSettings {
    /// Build the deferred factory. Nothing is read from the environment here.
    #[must_use]
    pub fn factory(&self, secrets: Arc<dyn SecretSource>, timeout: Duration) -> Arc<dyn ProviderFactory> {
        match self.kind {
            ProviderKind::HdWallet => Arc::new(HdWalletProviderFactory::new(
                self.url.clone(),
                self.secret_env.as_deref().unwrap_or(DEFAULT_MNEMONIC_ENV),
                secrets,
                timeout,
            )),
            ProviderKind::PrivateKey => Arc::new(PrivateKeyProviderFactory::new(
                self.url.clone(),
                self.secret_env.as_deref().unwrap_or(DEFAULT_PRIVATE_KEY_ENV),
                secrets,
                timeout,
            )),
        }
    }
}

/// One `[networks.<name>]` table
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub network_id: NetworkId,
    pub provider: Option<ProviderSettings>,
    #[serde(default)]
    pub production: bool,
}

impl NetworkSettings {
    /// Convert into a domain network
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the name or the connectivity settings are invalid.
    pub fn to_network_config(
        &self,
        name: &str,
        secrets: &Arc<dyn SecretSource>,
        timeout: Duration,
    ) -> Result<NetworkConfig, DomainError> {
        NetworkConfig::new(
            name,
            NewNetworkData {
                host: self.host.clone(),
                port: self.port,
                network_id: Some(self.network_id),
                provider: self.provider.as_ref().map(|p| p.factory(secrets.clone(), timeout)),
                production: self.production,
            },
        )
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkSettings>,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config/default` is missing or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the document is not valid TOML or misses required keys.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Build the network registry from the `[networks]` tables
    ///
    /// Provider factories capture the secret source but do not read from it.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if any network is inconsistent.
    pub fn build_registry(&self, secrets: Arc<dyn SecretSource>) -> Result<NetworkRegistry, DomainError> {
        let timeout = self.rpc.timeout();
        let networks = self
            .networks
            .iter()
            .map(|(name, settings)| settings.to_network_config(name, &secrets, timeout))
            .collect::<Result<Vec<_>, _>>()?;

        NetworkRegistry::new(networks)
    }
}
