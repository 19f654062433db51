//! GetLabHandler - Query handler for a single lab.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, LabView};
use crate::domain::foundation::{LabId, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::{CatalogStore, ProgressStore};

/// Handler fetching one lab with the caller's completion flag.
pub struct GetLabHandler {
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl GetLabHandler {
    pub fn new(catalog: Arc<dyn CatalogStore>, progress: Arc<dyn ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    pub async fn handle(&self, user_id: &UserId, lab_id: &LabId) -> Result<LabView, CatalogError> {
        let lab = self
            .catalog
            .find_lab(lab_id)
            .await?
            .ok_or_else(|| CatalogError::LabNotFound(lab_id.clone()))?;

        let completed = self
            .progress
            .is_complete(user_id, &ItemRef::Lab(lab_id.clone()))
            .await?;

        Ok(LabView::new(lab, completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalogStore, InMemoryProgressStore};
    use crate::adapters::seed;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (modules, labs) = seed::default_catalog();
        let handler = GetLabHandler::new(
            Arc::new(InMemoryCatalogStore::new(modules, labs)),
            Arc::new(InMemoryProgressStore::new()),
        );

        let result = handler
            .handle(&UserId::new("1").unwrap(), &LabId::new("no-such-lab").unwrap())
            .await;

        assert!(matches!(result, Err(CatalogError::LabNotFound(_))));
    }
}
