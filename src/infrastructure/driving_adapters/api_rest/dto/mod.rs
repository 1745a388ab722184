//! Data Transfer Objects
//!
//! Request and response shapes for the REST API.

pub mod network;

pub use network::{ConnectNetworkDto, ConnectionResponseDto, NetworkPathDto, NetworkResponseDto};
