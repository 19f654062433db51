//! LoginHandler - Command handler for credential login.

use std::sync::Arc;

use chrono::Duration;

use crate::application::handlers::progress::summarize;
use crate::domain::foundation::{AuthError, Timestamp};
use crate::domain::session::Session;
use crate::domain::user::PublicUser;
use crate::ports::{CatalogStore, ProgressStore, SessionStore, TokenSigner, UserStore};

/// Command to log a user in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Credential-stripped account with a derived progress summary.
    pub user: PublicUser,
    /// Signed opaque token the client presents as a Bearer credential.
    pub token: String,
    pub expires_at: Timestamp,
}

/// Handler for credential login.
///
/// Looks the account up by exact email, compares the password in
/// constant time, and on match issues a server-side session plus its
/// signed wire token. Unknown email and wrong password produce the
/// same `InvalidCredentials` error; neither panics.
pub struct LoginHandler {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    signer: Arc<dyn TokenSigner>,
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
    session_ttl: Duration,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        signer: Arc<dyn TokenSigner>,
        catalog: Arc<dyn CatalogStore>,
        progress: Arc<dyn ProgressStore>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            signer,
            catalog,
            progress,
            session_ttl,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        let Some(account) = self.users.find_by_email(&cmd.email).await? else {
            tracing::warn!("login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !account.password_matches(&cmd.password) {
            tracing::warn!(user_id = %account.id(), "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::issue(account.id().clone(), self.session_ttl);
        let expires_at = session.expires_at();
        let token = self.signer.issue(session.token_id());
        self.sessions.put(session).await?;

        let summary = summarize(&account, self.catalog.as_ref(), self.progress.as_ref()).await?;

        tracing::info!(user_id = %account.id(), role = %account.role(), "login succeeded");

        Ok(LoginResult {
            user: account.to_public(summary),
            token,
            expires_at,
        })
    }
}
