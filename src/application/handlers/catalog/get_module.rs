//! GetModuleHandler - Query handler for a single module.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, ModuleView};
use crate::domain::foundation::{ModuleId, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::{CatalogStore, ProgressStore};

/// Handler fetching one module with the caller's completion flag.
pub struct GetModuleHandler {
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl GetModuleHandler {
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

        let completed = self
            .progress
            .is_complete(user_id, &ItemRef::Module(module_id.clone()))
            .await?;

        Ok(ModuleView::new(module, completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalogStore, InMemoryProgressStore};
    use crate::adapters::seed;

    fn handler() -> GetModuleHandler {
        let (modules, labs) = seed::default_catalog();
        GetModuleHandler::new(
            Arc::new(InMemoryCatalogStore::new(modules, labs)),
            Arc::new(InMemoryProgressStore::new()),
        )
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let result = handler()
            .handle(
                &UserId::new("1").unwrap(),
                &ModuleId::new("no-such-module").unwrap(),
            )
            .await;

        assert!(matches!(result, Err(CatalogError::ModuleNotFound(_))));
    }

    #[tokio::test]
    async fn seeded_module_is_found() {
        let (modules, _) = seed::default_catalog();
        let id = modules[0].id.clone();

        let view = handler()
            .handle(&UserId::new("1").unwrap(), &id)
            .await
            .unwrap();

        assert_eq!(view.module.id, id);
        assert!(!view.completed);
    }
}
