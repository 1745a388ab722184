//! Network DTOs
//!
//! Data transfer objects for network API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::networks::ConnectOptions;
use crate::domain::gateways::SignerKind;
use crate::domain::models::network::{is_valid_network_name, NetworkConfig, NetworkConnection, NetworkId};

/// Validates a network name path segment with the rule used for declared networks
fn validate_network_name(name: &str) -> Result<(), validator::ValidationError> {
    if is_valid_network_name(name) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("network_name");
        error.message = Some("Network name may only contain letters, digits, '-' and '_'".into());
        Err(error)
    }
}

/// Path parameters for network endpoints
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NetworkPathDto {
    #[validate(length(min = 1, max = 64, message = "name must be between 1 and 64 characters"))]
    #[validate(custom(function = "validate_network_name"))]
    pub name: String,
}

/// DTO for a connection request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectNetworkDto {
    #[serde(default)]
    pub confirm_production: bool,
}

impl From<ConnectNetworkDto> for ConnectOptions {
    fn from(dto: ConnectNetworkDto) -> Self {
        Self {
            confirm_production: dto.confirm_production,
        }
    }
}

/// Provider description, without building the provider
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponseDto {
    pub signer: SignerKind,
    pub endpoint: String,
}

/// DTO for network responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub network_id: NetworkId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderResponseDto>,
    pub production: bool,
}

impl From<NetworkConfig> for NetworkResponseDto {
    fn from(network: NetworkConfig) -> Self {
        Self {
            name: network.name().to_string(),
            host: network.host().map(ToString::to_string),
            port: network.port(),
            network_id: network.network_id(),
            provider: network.provider().map(|factory| ProviderResponseDto {
                signer: factory.signer(),
                endpoint: factory.endpoint().to_string(),
            }),
            production: network.production(),
        }
    }
}

/// DTO for connection responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponseDto {
    pub name: String,
    pub endpoint: String,
    pub signer: SignerKind,
    pub network_id: String,
}

impl From<NetworkConnection> for ConnectionResponseDto {
    fn from(connection: NetworkConnection) -> Self {
        Self {
            name: connection.network,
            endpoint: connection.endpoint,
            signer: connection.signer,
            network_id: connection.reported_network_id,
        }
    }
}
