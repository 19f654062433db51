//! ListLabsHandler - Query handler for the lab catalog.

use std::sync::Arc;

use crate::domain::catalog::LabView;
use crate::domain::foundation::{StoreError, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::{CatalogStore, ProgressStore};

/// Handler listing all labs with one user's completion overlay.
pub struct ListLabsHandler {
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl ListLabsHandler {
    pub fn new(catalog: Arc<dyn CatalogStore>, progress: Arc<dyn ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<LabView>, StoreError> {
        let labs = self.catalog.list_labs().await?;

        let mut views = Vec::with_capacity(labs.len());
        for lab in labs {
            let completed = self
                .progress
                .is_complete(user_id, &ItemRef::Lab(lab.id.clone()))
                .await?;
            views.push(LabView::new(lab, completed));
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalogStore, InMemoryProgressStore};
    use crate::adapters::seed;

    #[tokio::test]
    async fn listing_returns_all_seeded_labs() {
        let (modules, labs) = seed::default_catalog();
        let expected = labs.len();
        let handler = ListLabsHandler::new(
            Arc::new(InMemoryCatalogStore::new(modules, labs)),
            Arc::new(InMemoryProgressStore::new()),
        );

        let views = handler.handle(&UserId::new("1").unwrap()).await.unwrap();
        assert_eq!(views.len(), expected);
        assert!(views.iter().all(|v| !v.completed));
    }
}
