//! Adapters - implementations of the ports plus the HTTP layer.

pub mod auth;
pub mod http;
pub mod memory;
pub mod seed;
