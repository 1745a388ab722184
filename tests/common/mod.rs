//! Common test utilities for e2e tests
//!
//! Provides a test application wired to a mock JSON-RPC node and in-memory secrets.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroize::Zeroizing;

use deploy_network_registry::domain::gateways::SecretSource;
use deploy_network_registry::infrastructure::driven_adapters::config::AppConfig;
use deploy_network_registry::infrastructure::driven_adapters::HttpNodeConnector;
use deploy_network_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// Test JWT secret (minimum 32 characters)
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-e2e-testing-only-min-32-chars";

/// Network id the mock node reports
pub const NODE_NETWORK_ID: &str = "88";

pub const TEST_MNEMONIC: &str =
    "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";

/// JWT claims for test tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct TestClaims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Secrets the tests can set between requests
#[derive(Default)]
pub struct TestSecrets {
    values: Mutex<HashMap<String, String>>,
}

impl TestSecrets {
    pub fn set(&self, name: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl SecretSource for TestSecrets {
    fn secret(&self, name: &str) -> Option<Zeroizing<String>> {
        self.values
            .lock()
            .unwrap()
            .get(name)
            .filter(|v| !v.is_empty())
            .map(|v| Zeroizing::new(v.clone()))
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub secrets: Arc<TestSecrets>,
    pub jwt_token: String,
    pub node: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a mock node
    pub async fn new() -> Self {
        let node = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "net_version"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": NODE_NETWORK_ID
            })))
            .mount(&node)
            .await;

        let config = Arc::new(create_test_config(&node));
        let secrets = Arc::new(TestSecrets::default());
        let registry = Arc::new(
            config
                .build_registry(secrets.clone())
                .expect("Failed to build test registry"),
        );

        let state = AppState::new(
            config.clone(),
            registry,
            Arc::new(HttpNodeConnector::new(config.rpc.timeout())),
        );

        Self {
            router: build_router(state),
            secrets,
            jwt_token: generate_test_token(),
            node,
        }
    }

    /// Get the authorization header value for requests
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }
}

/// Create a test configuration whose networks all point at the mock node
fn create_test_config(node: &MockServer) -> AppConfig {
    let address = node.address();
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[jwt]
secret = "{secret}"
expires_in_secs = 3600

[rpc]
timeout_secs = 5

[networks.development]
host = "{host}"
port = {port}
network_id = "*"

[networks.tomotestnet]
network_id = 88
production = true

[networks.tomotestnet.provider]
kind = "hd_wallet"
url = "{uri}"

[networks.localnet]
network_id = 88
production = true

[networks.localnet.provider]
kind = "private_key"
url = "{uri}"

[networks.tomomainnet]
network_id = 89
production = true

[networks.tomomainnet.provider]
kind = "hd_wallet"
url = "{uri}"
"#,
        secret = TEST_JWT_SECRET,
        host = address.ip(),
        port = address.port(),
        uri = node.uri(),
    );

    AppConfig::from_toml_str(&config_str).expect("Failed to parse test config")
}

/// Generate a valid JWT token for testing
pub fn generate_test_token() -> String {
    let now = Utc::now().timestamp();
    sign(TestClaims {
        sub: "test-user-id".to_string(),
        role: "deployer".to_string(),
        iat: now,
        exp: now + 3600,
    })
}

/// Generate an expired JWT token for testing unauthorized scenarios
pub fn generate_expired_token() -> String {
    let now = Utc::now().timestamp();
    sign(TestClaims {
        sub: "test-user-id".to_string(),
        role: "deployer".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    })
}

fn sign(claims: TestClaims) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to generate test JWT token")
}

/// Provider description in network responses
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ProviderResponse {
    pub signer: String,
    pub endpoint: String,
}

/// Network response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct NetworkResponse {
    pub name: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub network_id: serde_json::Value,
    pub provider: Option<ProviderResponse>,
    pub production: bool,
}

/// Connection response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ConnectionResponse {
    pub name: String,
    pub endpoint: String,
    pub signer: String,
    pub network_id: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
