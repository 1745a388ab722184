//! Request ID Middleware
//!
//! Tags each request with an ID that is echoed in the `x-request-id` response
//! header, recorded on the request's tracing span, and available to error
//! bodies through [`RequestId::current`] while the request is handled.

use std::future::Future;

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

tokio::task_local! {
    static CURRENT_REQUEST_ID: RequestId;
}

/// Header name for request ID
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID, scoped to the task handling the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new random request ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ID of the request being handled by the current task, if any
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT_REQUEST_ID.try_with(Clone::clone).ok()
    }

    /// Run `future` with `id` as the current request ID
    pub async fn scope<F: Future>(id: RequestId, future: F) -> F::Output {
        CURRENT_REQUEST_ID.scope(id, future).await
    }

    /// Reuse the caller's ID when it is a usable header value, otherwise generate one
    #[must_use]
    pub fn from_request(request: &Request<Body>) -> Self {
        request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty() && s.len() <= 128)
            .map_or_else(Self::new, |s| Self(s.to_string()))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware that assigns a request ID and runs the request inside a span carrying it
pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let mut response = RequestId::scope(request_id.clone(), next.run(request).instrument(span)).await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), header_value);
    }

    response
}
