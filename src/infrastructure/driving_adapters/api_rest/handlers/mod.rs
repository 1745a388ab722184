//! REST Handlers

pub mod networks;
