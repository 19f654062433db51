//! HTTP middleware and extractors.

mod auth;

pub use auth::{auth_middleware, bearer_token, AuthRejection, RequireAdmin, RequireAuth};
