//! CurrentSessionHandler - Query handler resolving a token to its user.

use std::sync::Arc;

use crate::application::handlers::progress::summarize;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};
use crate::domain::user::{PublicUser, UserAccount};
use crate::ports::{CatalogStore, ProgressStore, SessionStore, TokenSigner, UserStore};

/// Handler that resolves a Bearer token to the logged-in user.
///
/// Verifies the token signature, loads the server-side session, rejects
/// (and deletes) expired sessions, then loads the account.
pub struct CurrentSessionHandler {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    signer: Arc<dyn TokenSigner>,
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl CurrentSessionHandler {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        signer: Arc<dyn TokenSigner>,
        catalog: Arc<dyn CatalogStore>,
        progress: Arc<dyn ProgressStore>,
    ) -> Self {
        Self {
            users,
            sessions,
            signer,
            catalog,
            progress,
        }
    }

    /// Lightweight authentication for middleware: token to identity,
    /// no progress summary computed.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let account = self.resolve_account(token).await?;
        Ok(AuthenticatedUser::new(
            account.id().clone(),
            account.email(),
            account.role(),
        ))
    }

    /// Full session lookup for `GET /api/auth/session`: token to the
    /// public user with a derived progress summary.
    pub async fn handle(&self, token: &str) -> Result<PublicUser, AuthError> {
        let account = self.resolve_account(token).await?;
        let summary = summarize(&account, self.catalog.as_ref(), self.progress.as_ref()).await?;
        Ok(account.to_public(summary))
    }

    async fn resolve_account(&self, token: &str) -> Result<UserAccount, AuthError> {
        let token_id = self.signer.verify(token)?;

        let session = self
            .sessions
            .get(&token_id)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired_at(Timestamp::now()) {
            // Expired records are useless; drop them on first contact.
            self.sessions.delete(&token_id).await?;
            tracing::info!(token_id = %token_id, "rejected expired session");
            return Err(AuthError::SessionExpired);
        }

        self.users
            .find_by_id(session.user_id())
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
