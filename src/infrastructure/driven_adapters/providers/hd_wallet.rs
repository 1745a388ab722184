//! HD Wallet Provider Factory
//!
//! Builds a JSON-RPC provider signing with accounts derived from a mnemonic phrase
//! read from the environment at invocation time.

use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use zeroize::Zeroizing;

use super::json_rpc::{JsonRpcProvider, Signer};
use crate::domain::gateways::{Provider, ProviderFactory, SecretSource, SignerKind};
use crate::shared::errors::ProviderError;

/// Environment variable holding the mnemonic unless configured otherwise
pub const DEFAULT_MNEMONIC_ENV: &str = "MNEMONIC";

const MNEMONIC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

lazy_static! {
    /// Regex for a single lowercase mnemonic word
    static ref MNEMONIC_WORD_REGEX: Regex = Regex::new(r"^[a-z]+$").expect("valid regex");
}

/// Check the phrase shape and return it normalized to single spaces
fn normalize_mnemonic(variable: &str, phrase: &str) -> Result<Zeroizing<String>, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidSecret {
        variable: variable.to_string(),
        reason,
    };

    let words: Vec<&str> = phrase.split_whitespace().collect();
    if !MNEMONIC_WORD_COUNTS.contains(&words.len()) {
        return Err(invalid(format!(
            "mnemonic must have 12, 15, 18, 21 or 24 words, found {}",
            words.len()
        )));
    }
    if !words.iter().all(|word| MNEMONIC_WORD_REGEX.is_match(word)) {
        return Err(invalid("mnemonic words must be lowercase letters".to_string()));
    }

    Ok(Zeroizing::new(words.join(" ")))
}

/// Factory for mnemonic-backed providers
pub struct HdWalletProviderFactory {
    endpoint: String,
    secret_env: String,
    secrets: Arc<dyn SecretSource>,
    timeout: Duration,
}

impl HdWalletProviderFactory {
    /// Create a new HdWalletProviderFactory
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

impl ProviderFactory for HdWalletProviderFactory {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn signer(&self) -> SignerKind {
        SignerKind::Mnemonic
    }

    fn create(&self) -> Result<Arc<dyn Provider>, ProviderError> {
        tracing::debug!(endpoint = %self.endpoint, variable = %self.secret_env, "Building HD wallet provider");

        let phrase = self.secrets.secret(&self.secret_env).ok_or_else(|| {
            tracing::warn!(variable = %self.secret_env, "Mnemonic not set");
            ProviderError::MissingSecret {
                variable: self.secret_env.clone(),
            }
        })?;
        let mnemonic = normalize_mnemonic(&self.secret_env, &phrase)?;

        let provider = JsonRpcProvider::new(&self.endpoint, Signer::Mnemonic(mnemonic), self.timeout)?;
        Ok(Arc::new(provider))
    }
}
