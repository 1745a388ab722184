//! Network Use Cases
//!
//! Read access to the network registry and connection to its networks.

mod connect_network;
mod get_network_by_name;
mod list_networks;

pub use connect_network::{ConnectNetworkUseCase, ConnectOptions};
pub use get_network_by_name::GetNetworkByNameUseCase;
pub use list_networks::ListNetworksUseCase;
