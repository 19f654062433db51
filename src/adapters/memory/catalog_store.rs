//! In-memory catalog store adapter.

use async_trait::async_trait;

use crate::domain::catalog::{CourseModule, Lab};
use crate::domain::foundation::{LabId, ModuleId, StoreError};
use crate::ports::CatalogStore;

/// Catalog backed by seeded literals.
///
/// Immutable after construction; listing order is the insertion order
/// of the seed data. Admin submissions are acknowledged upstream and
/// never reach this store.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogStore {
    modules: Vec<CourseModule>,
    labs: Vec<Lab>,
}

impl InMemoryCatalogStore {
    pub fn new(modules: Vec<CourseModule>, labs: Vec<Lab>) -> Self {
        Self { modules, labs }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_modules(&self) -> Result<Vec<CourseModule>, StoreError> {
        Ok(self.modules.clone())
    }

    async fn list_labs(&self) -> Result<Vec<Lab>, StoreError> {
        Ok(self.labs.clone())
    }

    async fn find_module(&self, id: &ModuleId) -> Result<Option<CourseModule>, StoreError> {
        Ok(self.modules.iter().find(|m| &m.id == id).cloned())
    }

    async fn find_lab(&self, id: &LabId) -> Result<Option<Lab>, StoreError> {
        Ok(self.labs.iter().find(|l| &l.id == id).cloned())
    }

    async fn module_count(&self) -> Result<usize, StoreError> {
        Ok(self.modules.len())
    }

    async fn lab_count(&self) -> Result<usize, StoreError> {
        Ok(self.labs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed;

    #[tokio::test]
    async fn reads_do_not_change_listing_order() {
        let (modules, labs) = seed::default_catalog();
        let store = InMemoryCatalogStore::new(modules.clone(), labs);

        let first = store.list_modules().await.unwrap();
        let second = store.list_modules().await.unwrap();

        let ids = |ms: &[CourseModule]| ms.iter().map(|m| m.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&modules));
        assert_eq!(ids(&first), ids(&second));
    }
}
