//! Session store port.

use async_trait::async_trait;

use crate::domain::foundation::{SessionTokenId, StoreError};
use crate::domain::session::Session;

/// Server-side storage for login sessions.
///
/// The client holds only the signed token; the authoritative record
/// lives here. Logins write a record, logouts delete it.
///
/// # Contract
///
/// - `put` overwrites any record with the same token id.
/// - `delete` is idempotent: deleting a missing record succeeds.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, session: Session) -> Result<(), StoreError>;

    async fn get(&self, token_id: &SessionTokenId) -> Result<Option<Session>, StoreError>;

    async fn delete(&self, token_id: &SessionTokenId) -> Result<(), StoreError>;
}
