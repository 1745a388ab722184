//! JSON-RPC Provider
//!
//! HTTP JSON-RPC client for a blockchain node, optionally carrying signing material.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use zeroize::Zeroizing;

use crate::domain::gateways::provider::{Provider, SignerKind};
use crate::shared::errors::ProviderError;

/// Signing material attached to a provider
pub enum Signer {
    Node,
    Mnemonic(Zeroizing<String>),
    PrivateKey(Zeroizing<String>),
}

impl Signer {
    #[must_use]
    pub fn kind(&self) -> SignerKind {
        match self {
            Self::Node => SignerKind::Node,
            Self::Mnemonic(_) => SignerKind::Mnemonic,
            Self::PrivateKey(_) => SignerKind::PrivateKey,
        }
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signer({})", self.kind())
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Parse and check an RPC endpoint URL
///
/// # Errors
///
/// Returns `ProviderError::InvalidEndpoint` unless the URL is http(s) with a host.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ProviderError> {
    let invalid = |reason: &str| ProviderError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("URL must start with http:// or https://"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("URL must include a valid host"));
    }
    Ok(url)
}

/// Provider speaking JSON-RPC over HTTP
#[derive(Debug)]
pub struct JsonRpcProvider {
    client: Client,
    endpoint: String,
    url: Url,
    signer: Signer,
    next_id: AtomicU64,
}

impl JsonRpcProvider {
    /// Create a provider for the given endpoint
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidEndpoint` for a malformed URL and
    /// `ProviderError::Transport` if the HTTP client cannot be built.
    pub fn new(endpoint: &str, signer: Signer, timeout: Duration) -> Result<Self, ProviderError> {
        let url = parse_endpoint(endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            url,
            signer,
            next_id: AtomicU64::new(1),
        })
    }

    /// Perform a JSON-RPC call
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Transport` on HTTP failures, `ProviderError::Rpc` when the node
    /// answers with an error object, and `ProviderError::UnexpectedResponse` when it answers
    /// with neither a result nor an error.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(endpoint = %self.endpoint, method, id, "Sending JSON-RPC request");

        let response: RpcResponse<T> = self
            .client
            .post(self.url.clone())
            .json(&json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": method,
                "params": params,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            tracing::warn!(endpoint = %self.endpoint, method, code = error.code, "JSON-RPC error");
            return Err(ProviderError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| ProviderError::UnexpectedResponse(format!("{method} returned no result")))
    }
}

#[async_trait]
impl Provider for JsonRpcProvider {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn signer(&self) -> SignerKind {
        self.signer.kind()
    }

    async fn network_version(&self) -> Result<String, ProviderError> {
        // Some nodes answer with a number instead of a decimal string.
        match self.call::<Value>("net_version", json!([])).await? {
            Value::String(version) => Ok(version),
            Value::Number(version) => Ok(version.to_string()),
            other => Err(ProviderError::UnexpectedResponse(format!(
                "net_version returned {other}"
            ))),
        }
    }
}
