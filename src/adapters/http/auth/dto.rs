//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::user::PublicUser;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: PublicUser,
    pub token: String,
    pub expires_at: Timestamp,
}

/// Body of a rejected login: `{success: false, error}`. Clients branch
/// on the `success` field rather than the status code.
#[derive(Debug, Clone, Serialize)]
pub struct LoginFailure {
    pub success: bool,
    pub error: String,
}

impl LoginFailure {
    pub fn invalid_credentials() -> Self {
        Self {
            success: false,
            error: "Invalid email or password".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: PublicUser,
}
