//! Progress store port.

use async_trait::async_trait;

use crate::domain::foundation::{StoreError, UserId};
use crate::domain::progress::ItemRef;

/// Per-user completion flags, keyed by `(user, item)`.
///
/// # Contract
///
/// - `mark_complete` is idempotent: marking an already-complete item
///   succeeds and leaves the observable state unchanged.
/// - There is no unmark operation; completion is one-directional.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Sets the completion flag for this user/item pair.
    async fn mark_complete(&self, user_id: &UserId, item: &ItemRef) -> Result<(), StoreError>;

    /// Whether this user has completed this item.
    async fn is_complete(&self, user_id: &UserId, item: &ItemRef) -> Result<bool, StoreError>;

    /// Counts of completed `(modules, labs)` for this user.
    async fn completed_counts(&self, user_id: &UserId) -> Result<(usize, usize), StoreError>;
}
