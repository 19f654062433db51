//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is the identity extracted from a validated session
//! token; it carries only what request handling needs. `AuthError` is
//! domain-centric: it describes what went wrong from the application's
//! perspective, not from any particular token scheme's.

use thiserror::Error;

use super::{Role, StoreError, UserId};

/// Authenticated user extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The account identifier the session was issued for.
    pub user_id: UserId,

    /// Email address of the account.
    pub email: String,

    /// Role of the account.
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    /// Whether this user may create catalog content.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Authentication and session errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Email/password pair did not match any account. Deliberately does
    /// not distinguish "unknown email" from "wrong password".
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The token is malformed or its signature does not verify.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token signature is valid but no session record exists for it.
    #[error("Session not found")]
    SessionNotFound,

    /// The session record exists but has passed its expiry.
    #[error("Session expired")]
    SessionExpired,

    /// Session is valid but the account no longer exists in the store.
    #[error("User not found")]
    UserNotFound,

    /// The backing store failed.
    #[error("auth store failure: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Returns true if this error means the client should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken
                | AuthError::SessionNotFound
                | AuthError::SessionExpired
                | AuthError::UserNotFound
        )
    }
}
