//! Test doubles for the provider and secret ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::gateways::{NodeConnector, Provider, ProviderFactory, SecretSource, SignerKind};
use crate::shared::errors::ProviderError;

pub struct StubProvider {
    endpoint: String,
    signer: SignerKind,
    reported_network_id: String,
}

#[async_trait]
impl Provider for StubProvider {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn signer(&self) -> SignerKind {
        self.signer
    }

    async fn network_version(&self) -> Result<String, ProviderError> {
        Ok(self.reported_network_id.clone())
    }
}

/// Factory that counts invocations and can be told to fail
pub struct StubProviderFactory {
    reported_network_id: String,
    failure: Mutex<Option<ProviderError>>,
    invocations: AtomicUsize,
}

impl StubProviderFactory {
    pub fn new(reported_network_id: &str) -> Self {
        Self {
            reported_network_id: reported_network_id.to_string(),
            failure: Mutex::new(None),
            invocations: AtomicUsize::new(0),
        }
    }

    pub fn failing_once(self, error: ProviderError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl ProviderFactory for StubProviderFactory {
    fn endpoint(&self) -> &str {
        "https://rpc.example.com"
    }

    fn signer(&self) -> SignerKind {
        SignerKind::Mnemonic
    }

    fn create(&self) -> Result<Arc<dyn Provider>, ProviderError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }
        Ok(Arc::new(StubProvider {
            endpoint: self.endpoint().to_string(),
            signer: self.signer(),
            reported_network_id: self.reported_network_id.clone(),
        }))
    }
}

/// Connector that reports a fixed network id for every node
pub struct StubNodeConnector {
    pub reported_network_id: String,
}

impl NodeConnector for StubNodeConnector {
    fn connect(&self, host: &str, port: u16) -> Result<Arc<dyn Provider>, ProviderError> {
        Ok(Arc::new(StubProvider {
            endpoint: format!("http://{host}:{port}"),
            signer: SignerKind::Node,
            reported_network_id: self.reported_network_id.clone(),
        }))
    }
}

/// Mutable in-memory secrets, so tests never touch the process environment
#[derive(Default)]
pub struct InMemorySecrets {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySecrets {
    pub fn set(&self, name: &str, value: &str) {
        self.values.lock().unwrap().insert(name.to_string(), value.to_string());
    }
}

impl SecretSource for InMemorySecrets {
    fn secret(&self, name: &str) -> Option<Zeroizing<String>> {
        self.values
            .lock()
            .unwrap()
            .get(name)
            .filter(|value| !value.is_empty())
            .map(|value| Zeroizing::new(value.clone()))
    }
}
