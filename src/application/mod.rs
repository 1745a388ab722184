//! Application Layer
//!
//! Use cases over the network registry.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod use_cases;
