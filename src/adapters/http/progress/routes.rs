//! HTTP routes for progress endpoints.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use super::super::middleware::auth_middleware;
use super::super::state::ApiState;
use super::handlers::{complete_lab, complete_module, get_progress};

/// Creates the progress router behind the session middleware.
pub fn progress_routes(state: ApiState) -> Router {
    Router::new()
        // POST /api/modules/:id/complete
        .route("/api/modules/:id/complete", post(complete_module))
        // POST /api/labs/:id/complete
        .route("/api/labs/:id/complete", post(complete_lab))
        // GET /api/progress
        .route("/api/progress", get(get_progress))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}
