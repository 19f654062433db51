//! MarkLabCompleteHandler - Command handler for lab completion.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, LabView};
use crate::domain::foundation::{LabId, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::{CatalogStore, ProgressStore};

/// Handler marking a lab complete for a user. Idempotent, same as
/// module completion.
pub struct MarkLabCompleteHandler {
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl MarkLabCompleteHandler {
    pub fn new(catalog: Arc<dyn CatalogStore>, progress: Arc<dyn ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    pub async fn handle(&self, user_id: &UserId, lab_id: &LabId) -> Result<LabView, CatalogError> {
        let lab = self
            .catalog
            .find_lab(lab_id)
            .await?
            .ok_or_else(|| CatalogError::LabNotFound(lab_id.clone()))?;

        self.progress
            .mark_complete(user_id, &ItemRef::Lab(lab_id.clone()))
            .await?;

        tracing::info!(user_id = %user_id, lab_id = %lab_id, "lab completed");
        Ok(LabView::new(lab, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalogStore, InMemoryProgressStore};
    use crate::adapters::seed;

    #[tokio::test]
    async fn marking_a_lab_sets_its_flag() {
        let (modules, labs) = seed::default_catalog();
        let lab_id = labs[0].id.clone();
        let handler = MarkLabCompleteHandler::new(
            Arc::new(InMemoryCatalogStore::new(modules, labs)),
            Arc::new(InMemoryProgressStore::new()),
        );

        let view = handler
            .handle(&UserId::new("1").unwrap(), &lab_id)
            .await
            .unwrap();

        assert!(view.completed);
        assert_eq!(view.lab.id, lab_id);
    }
}
