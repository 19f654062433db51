//! HTTP adapter for progress endpoints.
//!
//! - `POST /api/modules/:id/complete` - mark a module complete (idempotent)
//! - `POST /api/labs/:id/complete` - mark a lab complete (idempotent)
//! - `GET /api/progress` - derived progress summary

pub mod handlers;
pub mod routes;

pub use routes::progress_routes;
