//! Private Key Provider Factory
//!
//! Builds a JSON-RPC provider signing with a single raw private key. The key is read
//! from the environment when the factory is invoked; it is never part of configuration.

use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use zeroize::Zeroizing;

use super::json_rpc::{JsonRpcProvider, Signer};
use crate::domain::gateways::{Provider, ProviderFactory, SecretSource, SignerKind};
use crate::shared::errors::ProviderError;

/// Environment variable holding the private key unless configured otherwise
pub const DEFAULT_PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

lazy_static! {
    /// Regex for a 32-byte hex private key with optional 0x prefix
    static ref PRIVATE_KEY_REGEX: Regex = Regex::new(r"^(0x)?[a-fA-F0-9]{64}$").expect("valid regex");
}

/// Check the key format and return it lowercased without the 0x prefix
fn normalize_private_key(variable: &str, key: &str) -> Result<Zeroizing<String>, ProviderError> {
    let key = key.trim();
    if !PRIVATE_KEY_REGEX.is_match(key) {
        return Err(ProviderError::InvalidSecret {
            variable: variable.to_string(),
            reason: "private key must be 64 hex characters, optionally prefixed with 0x".to_string(),
        });
    }

    let digits = key.strip_prefix("0x").unwrap_or(key);
    if digits.bytes().all(|b| b == b'0') {
        return Err(ProviderError::InvalidSecret {
            variable: variable.to_string(),
            reason: "private key must not be zero".to_string(),
        });
    }

    Ok(Zeroizing::new(digits.to_ascii_lowercase()))
}

/// Factory for private-key-backed providers
pub struct PrivateKeyProviderFactory {
    endpoint: String,
    secret_env: String,
    secrets: Arc<dyn SecretSource>,
    timeout: Duration,
}

impl PrivateKeyProviderFactory {
    /// Create a new PrivateKeyProviderFactory
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        secret_env: impl Into<String>,
        secrets: Arc<dyn SecretSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            secret_env: secret_env.into(),
            secrets,
            timeout,
        }
    }
}

impl ProviderFactory for PrivateKeyProviderFactory {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn signer(&self) -> SignerKind {
        SignerKind::PrivateKey
    }

    fn create(&self) -> Result<Arc<dyn Provider>, ProviderError> {
        tracing::debug!(endpoint = %self.endpoint, variable = %self.secret_env, "Building private key provider");

        let raw = self.secrets.secret(&self.secret_env).ok_or_else(|| {
            tracing::warn!(variable = %self.secret_env, "Private key not set");
            ProviderError::MissingSecret {
                variable: self.secret_env.clone(),
            }
        })?;
        let key = normalize_private_key(&self.secret_env, &raw)?;

        let provider = JsonRpcProvider::new(&self.endpoint, Signer::PrivateKey(key), self.timeout)?;
        Ok(Arc::new(provider))
    }
}
