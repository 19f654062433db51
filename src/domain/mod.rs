//! Domain layer - entities, value objects, and domain errors.
//!
//! No I/O happens here; stores and transports live in `adapters`.

pub mod catalog;
pub mod foundation;
pub mod progress;
pub mod session;
pub mod user;
