//! ListModulesHandler - Query handler for the module catalog.

use std::sync::Arc;

use crate::domain::catalog::ModuleView;
use crate::domain::foundation::{StoreError, UserId};
use crate::domain::progress::ItemRef;
use crate::ports::{CatalogStore, ProgressStore};

/// Handler listing all modules with one user's completion overlay.
///
/// Order is the catalog's seed insertion order; reads never change it.
pub struct ListModulesHandler {
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl ListModulesHandler {
    pub fn new(catalog: Arc<dyn CatalogStore>, progress: Arc<dyn ProgressStore>) -> Self {
        Self { catalog, progress }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<ModuleView>, StoreError> {
        let modules = self.catalog.list_modules().await?;

        let mut views = Vec::with_capacity(modules.len());
        for module in modules {
            let completed = self
                .progress
                .is_complete(user_id, &ItemRef::Module(module.id.clone()))
                .await?;
            views.push(ModuleView::new(module, completed));
        }
        Ok(views)
    }
}
