//! In-memory progress store adapter.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{StoreError, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::ProgressStore;

/// Progress flags held as a `(user, item)` set.
///
/// Inserting into a set makes idempotence structural: re-marking a
/// completed item changes nothing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressStore {
    completed: Arc<RwLock<HashSet<(UserId, ItemRef)>>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of completion flags across all users (test aid).
    pub async fn flag_count(&self) -> usize {
        self.completed.read().await.len()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn mark_complete(&self, user_id: &UserId, item: &ItemRef) -> Result<(), StoreError> {
        self.completed
            .write()
            .await
            .insert((user_id.clone(), item.clone()));
        Ok(())
    }

    async fn is_complete(&self, user_id: &UserId, item: &ItemRef) -> Result<bool, StoreError> {
        Ok(self
            .completed
            .read()
            .await
            .contains(&(user_id.clone(), item.clone())))
    }

    async fn completed_counts(&self, user_id: &UserId) -> Result<(usize, usize), StoreError> {
        let completed = self.completed.read().await;
        let mut modules = 0;
        let mut labs = 0;
        for (uid, item) in completed.iter() {
            if uid != user_id {
                continue;
            }
            if item.is_module() {
                modules += 1;
            } else {
                labs += 1;
            }
        }
        Ok((modules, labs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{LabId, ModuleId};

    fn user() -> UserId {
        UserId::new("1").unwrap()
    }

    fn module_ref(id: &str) -> ItemRef {
        ItemRef::Module(ModuleId::new(id).unwrap())
    }

    #[tokio::test]
    async fn marking_twice_leaves_one_flag() {
        let store = InMemoryProgressStore::new();
        store.mark_complete(&user(), &module_ref("m1")).await.unwrap();
        store.mark_complete(&user(), &module_ref("m1")).await.unwrap();

        assert!(store.is_complete(&user(), &module_ref("m1")).await.unwrap());
        assert_eq!(store.flag_count().await, 1);
    }

    #[tokio::test]
    async fn counts_split_modules_from_labs_per_user() {
        let store = InMemoryProgressStore::new();
        let other = UserId::new("2").unwrap();
        store.mark_complete(&user(), &module_ref("m1")).await.unwrap();
        store.mark_complete(&user(), &module_ref("m2")).await.unwrap();
        store
            .mark_complete(&user(), &ItemRef::Lab(LabId::new("l1").unwrap()))
            .await
            .unwrap();
        store.mark_complete(&other, &module_ref("m1")).await.unwrap();

        assert_eq!(store.completed_counts(&user()).await.unwrap(), (2, 1));
        assert_eq!(store.completed_counts(&other).await.unwrap(), (1, 0));
    }

    #[tokio::test]
    async fn unmarked_items_read_as_incomplete() {
        let store = InMemoryProgressStore::new();
        assert!(!store.is_complete(&user(), &module_ref("m1")).await.unwrap());
        assert_eq!(store.completed_counts(&user()).await.unwrap(), (0, 0));
    }
}
