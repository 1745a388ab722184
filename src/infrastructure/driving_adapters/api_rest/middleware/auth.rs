//! JWT Authentication Middleware
//!
//! Extracts and validates JWT bearer tokens from requests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ErrorResponse;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role
    #[serde(default)]
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated caller extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub role: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
        }
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Error type for authentication failures
pub struct AuthError {
    message: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("UNAUTHORIZED", self.message.to_string(), None);

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts
            .extensions
            .get::<Arc<AppConfig>>()
            .cloned()
            .ok_or(AuthError {
                message: "Configuration not available",
            })?;

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError {
                message: "Missing Authorization header",
            })?
            .strip_prefix("Bearer ")
            .ok_or(AuthError {
                message: "Invalid Authorization header format",
            })?;

        // Pin the algorithm to avoid algorithm confusion
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt.secret.as_bytes()),
            &validation,
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "Rejected JWT");
            AuthError {
                message: "Invalid or expired token",
            }
        })?;

        Ok(JwtAuth(token_data.claims.into()))
    }
}

/// Middleware that adds config to request extensions for JWT validation
pub async fn add_config_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.config.clone());
    next.run(request).await
}
