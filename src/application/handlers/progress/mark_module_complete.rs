//! MarkModuleCompleteHandler - Command handler for module completion.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, ModuleView};
use crate::domain::foundation::{ModuleId, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::{CatalogStore, ProgressStore};

/// Handler marking a module complete for a user.
///
/// The module must exist in the catalog. Marking is idempotent: a
/// second call is a no-op with the same observable result.
pub struct MarkModuleCompleteHandler {
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl MarkModuleCompleteHandler {
    pub fn new(catalog: Arc<dyn CatalogStore>, progress: Arc<dyn ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    pub async fn handle(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<ModuleView, CatalogError> {
        let module = self
            .catalog
            .find_module(module_id)
            .await?
            .ok_or_else(|| CatalogError::ModuleNotFound(module_id.clone()))?;

        self.progress
            .mark_complete(user_id, &ItemRef::Module(module_id.clone()))
            .await?;

        tracing::info!(user_id = %user_id, module_id = %module_id, "module completed");
        Ok(ModuleView::new(module, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalogStore, InMemoryProgressStore};
    use crate::adapters::seed;

    fn fixture() -> (MarkModuleCompleteHandler, ModuleId) {
        let (modules, labs) = seed::default_catalog();
        let first_id = modules[0].id.clone();
        let handler = MarkModuleCompleteHandler::new(
            Arc::new(InMemoryCatalogStore::new(modules, labs)),
            Arc::new(InMemoryProgressStore::new()),
        );
        (handler, first_id)
    }

    #[tokio::test]
    async fn marking_twice_is_a_no_op() {
        let (handler, module_id) = fixture();
        let user_id = UserId::new("1").unwrap();

        let first = handler.handle(&user_id, &module_id).await.unwrap();
        let second = handler.handle(&user_id, &module_id).await.unwrap();

        assert!(first.completed);
        assert!(second.completed);
    }

    #[tokio::test]
    async fn unknown_module_is_not_found() {
        let (handler, _) = fixture();
        let result = handler
            .handle(
                &UserId::new("1").unwrap(),
                &ModuleId::new("no-such-module").unwrap(),
            )
            .await;

        assert!(matches!(result, Err(CatalogError::ModuleNotFound(_))));
    }
}
