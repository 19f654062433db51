//! In-memory user store adapter.

use async_trait::async_trait;

use crate::domain::foundation::{StoreError, UserId};
use crate::domain::user::UserAccount;
use crate::ports::UserStore;

/// User store backed by the seeded account list.
///
/// Accounts never change after startup, so lookups scan an immutable
/// `Vec` without locking. Email uniqueness is enforced by the seed
/// loader before this store is built.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Vec<UserAccount>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<UserAccount>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, StoreError> {
        Ok(self.users.iter().find(|u| u.email() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, StoreError> {
        Ok(self.users.iter().find(|u| u.id() == id).cloned())
    }
}
