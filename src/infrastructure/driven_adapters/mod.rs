//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Configuration and registry loading
//! - JSON-RPC providers and their factories
//! - Environment secrets

pub mod config;
pub mod providers;
pub mod secret_source;

pub use config::AppConfig;
pub use providers::{HdWalletProviderFactory, HttpNodeConnector, JsonRpcProvider, PrivateKeyProviderFactory};
pub use secret_source::EnvSecretSource;
