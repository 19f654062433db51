//! LogoutHandler - Command handler for ending a session.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::ports::{SessionStore, TokenSigner};

/// Handler for logout.
///
/// Deletes the server-side session referenced by the token. Idempotent:
/// logging out an already-ended session succeeds. A token that fails
/// signature verification still errors.
pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
    signer: Arc<dyn TokenSigner>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { sessions, signer }
    }

    pub async fn handle(&self, token: &str) -> Result<(), AuthError> {
        let token_id = self.signer.verify(token)?;
        self.sessions.delete(&token_id).await?;
        tracing::info!(token_id = %token_id, "session ended");
        Ok(())
    }
}
