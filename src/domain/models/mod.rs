//! Domain Models
//!
//! Pure domain entities and value objects representing deployment targets.

pub mod network;
pub mod registry;

pub use network::{Connectivity, NetworkConfig, NetworkConnection, NetworkId, NewNetworkData};
pub use registry::NetworkRegistry;
