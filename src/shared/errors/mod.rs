//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::network::MAX_NETWORK_NAME_LEN;
use crate::infrastructure::driving_adapters::api_rest::middleware::request_id::RequestId;

/// Domain-level errors raised while building or querying the registry
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Network '{0}' not found")]
    NetworkNotFound(String),

    #[error("Network '{0}' is declared more than once")]
    DuplicateNetwork(String),

    #[error("Network '{0}' declares both host/port and a provider")]
    ConflictingConnectivity(String),

    #[error("Network '{0}' declares neither host/port nor a provider")]
    MissingConnectivity(String),

    #[error("Network '{0}' must declare host and port together")]
    IncompleteEndpoint(String),

    #[error("Invalid network id '{0}': expected \"*\" or a non-negative integer")]
    InvalidNetworkId(String),

    #[error("Invalid network name '{0}': use 1-{max} letters, digits, '-' or '_'", max = MAX_NETWORK_NAME_LEN)]
    InvalidNetworkName(String),
}

/// Provider-level errors raised when a provider factory is invoked or a node is queried
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Environment variable {variable} is not set")]
    MissingSecret { variable: String },

    #[error("Environment variable {variable} holds an invalid secret: {reason}")]
    InvalidSecret { variable: String, reason: String },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected RPC response: {0}")]
    UnexpectedResponse(String),
}

impl ProviderError {
    /// Whether the failure comes from local provider configuration rather than the remote node
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingSecret { .. } | Self::InvalidSecret { .. } | Self::InvalidEndpoint { .. }
        )
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Network '{network}' expects network id {expected} but the node reported {reported}")]
    NetworkMismatch {
        network: String,
        expected: String,
        reported: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::Domain(DomainError::NetworkNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NetworkMismatch { .. } => StatusCode::CONFLICT,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Provider(err) if err.is_configuration() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::Domain(DomainError::NetworkNotFound(_)) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NetworkMismatch { .. } => "NETWORK_MISMATCH",
            Self::Domain(_) => "INVALID_STATE",
            Self::Provider(err) if err.is_configuration() => "PROVIDER_CONFIGURATION",
            Self::Provider(_) => "UPSTREAM_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Build an error body stamped with the current request's ID, when there is one
    #[must_use]
    pub fn new(code: &str, message: String, details: Option<Vec<FieldError>>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
            request_id: RequestId::current().map(|id| id.0),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            ApiError::UseCase(uc_error) => {
                if uc_error.status_code().is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed");
                }
                (uc_error.status_code(), uc_error.error_code(), uc_error.to_string(), None)
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
        };

        (status, Json(ErrorResponse::new(code, message, details))).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let errors = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: (*field).to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map_or_else(|| "invalid".to_string(), ToString::to_string),
                })
            })
            .collect();
        ApiError::Validation(errors)
    }
}
