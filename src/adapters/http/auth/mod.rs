//! HTTP adapter for auth endpoints.
//!
//! - `POST /api/auth/login` - credential login, returns user + token
//! - `GET /api/auth/session` - resolve the current Bearer token
//! - `POST /api/auth/logout` - end the session (idempotent)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
