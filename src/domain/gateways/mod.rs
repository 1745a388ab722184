//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod provider;
pub mod secret_source;

pub use provider::{NodeConnector, Provider, ProviderFactory, SignerKind};
pub use secret_source::SecretSource;
