//! GetProgressSummaryHandler - Query handler for the progress rollup.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, StoreError, UserId};
use crate::domain::user::{ProgressSummary, UserAccount};
use crate::ports::{CatalogStore, ProgressStore, UserStore};

/// Derives a user's progress summary from live stores.
///
/// Counts come from the progress store and totals from the catalog, so
/// the rollup can never disagree with the item-level flags.
pub(crate) async fn summarize(
    account: &UserAccount,
    catalog: &dyn CatalogStore,
    progress: &dyn ProgressStore,
) -> Result<ProgressSummary, StoreError> {
    let (modules_completed, labs_completed) = progress.completed_counts(account.id()).await?;
    Ok(ProgressSummary::new(
        modules_completed,
        catalog.module_count().await?,
        labs_completed,
        catalog.lab_count().await?,
        account.certificates().to_vec(),
    ))
}

/// Handler for `GET /api/progress`.
pub struct GetProgressSummaryHandler {
    users: Arc<dyn UserStore>,
    catalog: Arc<dyn CatalogStore>,
    progress: Arc<dyn ProgressStore>,
}

impl GetProgressSummaryHandler {
    pub fn new(
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn CatalogStore>,
        progress: Arc<dyn ProgressStore>,
    ) -> Self {
        Self {
            users,
            catalog,
            progress,
        }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<ProgressSummary, AuthError> {
        let account = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(summarize(&account, self.catalog.as_ref(), self.progress.as_ref()).await?)
    }
}
