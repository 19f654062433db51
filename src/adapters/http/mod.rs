//! HTTP adapter - REST API implementation.
//!
//! Each area (auth, catalog, progress) has its own DTOs, handlers, and
//! routes; `api_router` assembles them. Catalog and progress routes sit
//! behind the session-validating middleware; auth routes handle the raw
//! token themselves.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod health;
pub mod middleware;
pub mod progress;
mod state;

use axum::routing::get;
use axum::Router;

pub use error::{ApiError, ErrorResponse};
pub use state::ApiState;

/// Assembles the full API router.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .merge(auth::auth_routes(state.clone()))
        .merge(catalog::catalog_routes(state.clone()))
        .merge(progress::progress_routes(state))
        .route("/health", get(health::health))
}
