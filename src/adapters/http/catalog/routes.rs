//! HTTP routes for catalog endpoints.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use super::super::middleware::auth_middleware;
use super::super::state::ApiState;
use super::handlers::{create_lab, create_module, get_lab, get_module, list_labs, list_modules};

/// Creates the catalog router behind the session middleware.
pub fn catalog_routes(state: ApiState) -> Router {
    Router::new()
        // GET /api/modules, POST /api/modules
        .route("/api/modules", get(list_modules).post(create_module))
        // GET /api/modules/:id
        .route("/api/modules/:id", get(get_module))
        // GET /api/labs, POST /api/labs
        .route("/api/labs", get(list_labs).post(create_lab))
        // GET /api/labs/:id
        .route("/api/labs/:id", get(get_lab))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}
