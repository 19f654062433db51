//! In-memory session store adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{SessionTokenId, StoreError};
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Session records keyed by token id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionTokenId, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records (test aid).
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session: Session) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session.token_id(), session);
        Ok(())
    }

    async fn get(&self, token_id: &SessionTokenId) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.read().await.get(token_id).cloned())
    }

    async fn delete(&self, token_id: &SessionTokenId) -> Result<(), StoreError> {
        self.sessions.write().await.remove(token_id);
        Ok(())
    }
}
