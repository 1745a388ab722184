//! Network Handlers
//!
//! HTTP handlers exposing the network registry read-only.
//! All endpoints require JWT authentication.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    ConnectNetworkDto, ConnectionResponseDto, NetworkPathDto, NetworkResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
///
/// All routes require JWT authentication via the `JwtAuth` extractor.
/// The `add_config_extension` middleware must inject the config into request extensions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_networks))
        .route("/:name", get(get_network_by_name))
        .route("/:name/connect", post(connect_network))
}

/// GET /networks - List all networks
///
/// # Responses
///
/// * 200 OK - List of networks (sorted by name)
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn list_networks(
    _auth: JwtAuth,
    State(state): State<AppState>,
) -> Json<Vec<NetworkResponseDto>> {
    let networks = state.list_networks_use_case.execute();

    Json(networks.into_iter().map(NetworkResponseDto::from).collect())
}

/// GET /networks/:name - Get a network by name
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - Malformed network name
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Network does not exist
#[axum::debug_handler]
async fn get_network_by_name(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(path): Path<NetworkPathDto>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    path.validate()?;

    let network = state.get_network_by_name_use_case.execute(&path.name)?;

    Ok(Json(NetworkResponseDto::from(network)))
}

/// POST /networks/:name/connect - Build the network's provider and verify the node
///
/// The body may be omitted; production networks need `{"confirmProduction": true}`.
/// A body that is present must be a JSON object of the expected shape.
///
/// # Responses
///
/// * 200 OK - Connected; the node serves the expected network
/// * 400 Bad Request - Malformed network name or request body
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Production network without confirmation
/// * 404 Not Found - Network does not exist
/// * 409 Conflict - Node serves a different network id
/// * 422 Unprocessable Entity - Provider secret missing or malformed
/// * 502 Bad Gateway - Node unreachable or returned an error
#[axum::debug_handler]
async fn connect_network(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(path): Path<NetworkPathDto>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ConnectionResponseDto>, ApiError> {
    path.validate()?;

    let options = parse_connect_body(&headers, &body)?;
    let connection = state
        .connect_network_use_case
        .execute(&path.name, options.into())
        .await?;

    Ok(Json(ConnectionResponseDto::from(connection)))
}

/// An empty body means no confirmation; anything else must be well-formed JSON
fn parse_connect_body(headers: &HeaderMap, body: &[u8]) -> Result<ConnectNetworkDto, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ConnectNetworkDto::default());
    }

    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"));
    if !is_json {
        return Err(ApiError::BadRequest(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    let Json(dto) = Json::<ConnectNetworkDto>::from_bytes(body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    Ok(dto)
}
