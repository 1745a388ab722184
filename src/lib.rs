//! Deployment Network Registry
//!
//! Named blockchain deployment targets with lazily constructed RPC providers,
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod testing;
