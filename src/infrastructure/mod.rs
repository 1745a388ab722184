//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (configuration, JSON-RPC providers, environment secrets).

pub mod driven_adapters;
pub mod driving_adapters;
