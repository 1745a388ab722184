//! Provider Adapters
//!
//! JSON-RPC provider and the factories that build it from environment secrets.

pub mod hd_wallet;
pub mod json_rpc;
pub mod private_key;

use std::net::Ipv6Addr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::gateways::{NodeConnector, Provider};
use crate::shared::errors::ProviderError;

pub use hd_wallet::{HdWalletProviderFactory, DEFAULT_MNEMONIC_ENV};
pub use json_rpc::{JsonRpcProvider, Signer};
pub use private_key::{PrivateKeyProviderFactory, DEFAULT_PRIVATE_KEY_ENV};

/// Connects to locally-run nodes over plain HTTP, using node-managed accounts
pub struct HttpNodeConnector {
    timeout: Duration,
}

impl HttpNodeConnector {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl NodeConnector for HttpNodeConnector {
    fn connect(&self, host: &str, port: u16) -> Result<Arc<dyn Provider>, ProviderError> {
        let endpoint = if host.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{host}]:{port}")
        } else {
            format!("http://{host}:{port}")
        };
        tracing::debug!(endpoint = %endpoint, "Connecting to local node");
        Ok(Arc::new(JsonRpcProvider::new(&endpoint, Signer::Node, self.timeout)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::SignerKind;

    #[test]
    fn should_build_http_endpoint_from_host_and_port() {
        let provider = HttpNodeConnector::new(Duration::from_secs(5))
            .connect("127.0.0.1", 7545)
            .unwrap();

        assert_eq!(provider.endpoint(), "http://127.0.0.1:7545");
        assert_eq!(provider.signer(), SignerKind::Node);
    }

    #[test]
    fn should_bracket_ipv6_host() {
        let connector = HttpNodeConnector::new(Duration::from_secs(5));

        let provider = connector.connect("::1", 7545).unwrap();
        assert_eq!(provider.endpoint(), "http://[::1]:7545");

        let provider = connector.connect("[::1]", 7545).unwrap();
        assert_eq!(provider.endpoint(), "http://[::1]:7545");
    }

    #[test]
    fn should_reject_unusable_host() {
        let result = HttpNodeConnector::new(Duration::from_secs(5)).connect("bad host", 7545);
        assert!(matches!(result, Err(ProviderError::InvalidEndpoint { .. })));
    }
}
