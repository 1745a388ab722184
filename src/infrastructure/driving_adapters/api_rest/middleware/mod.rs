//! API Middleware
//!
//! Authentication and request tracing for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{add_config_extension, AuthenticatedUser, JwtAuth};
pub use request_id::{request_id_middleware, RequestId};
