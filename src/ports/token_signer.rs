//! Token signer port.

use crate::domain::foundation::{AuthError, SessionTokenId};

/// Signs and verifies the opaque wire tokens that reference sessions.
///
/// Signing is pure computation, so this port is synchronous.
///
/// # Contract
///
/// - `verify(issue(id))` returns `id`.
/// - Malformed or forged tokens fail with `AuthError::InvalidToken`;
///   signature comparison must be constant-time.
/// - A verified token says nothing about whether the session still
///   exists or has expired; callers check the session store for that.
pub trait TokenSigner: Send + Sync {
    /// Produces the signed wire form of a token id.
    fn issue(&self, token_id: SessionTokenId) -> String;

    /// Checks the signature and extracts the token id.
    fn verify(&self, token: &str) -> Result<SessionTokenId, AuthError>;
}
