//! User store port.

use async_trait::async_trait;

use crate::domain::foundation::{StoreError, UserId};
use crate::domain::user::UserAccount;

/// Read access to seeded user accounts.
///
/// # Contract
///
/// - Email lookup is case-sensitive, exact match.
/// - Absence is `Ok(None)`, never an error; `StoreError` is reserved
///   for store malfunction.
/// - Emails are unique across the store (enforced at seed time).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds the account with exactly this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, StoreError>;

    /// Finds the account with this id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, StoreError>;
}
