//! HTTP routes for auth endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::ApiState;
use super::handlers::{current_session, login, logout};

/// Creates the auth router.
///
/// These routes work with the raw token, so they sit outside the
/// session-validating middleware.
pub fn auth_routes(state: ApiState) -> Router {
    Router::new()
        // POST /api/auth/login
        .route("/api/auth/login", post(login))
        // GET /api/auth/session
        .route("/api/auth/session", get(current_session))
        // POST /api/auth/logout
        .route("/api/auth/logout", post(logout))
        .with_state(state)
}
