//! HTTP adapter for catalog endpoints.
//!
//! - `GET /api/modules` - list modules with the caller's completion flags
//! - `GET /api/modules/:id` - one module
//! - `POST /api/modules` - admin module submission (acknowledged, not persisted)
//! - `GET /api/labs` / `GET /api/labs/:id` / `POST /api/labs` - same for labs

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
