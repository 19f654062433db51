//! Catalog store port.

use async_trait::async_trait;

use crate::domain::catalog::{CourseModule, Lab};
use crate::domain::foundation::{LabId, ModuleId, StoreError};

/// Read access to the module/lab catalog.
///
/// # Contract
///
/// - Listing returns the full collection in seed insertion order,
///   unchanged by reads.
/// - Lookups that find nothing return `Ok(None)`; callers render that
///   as a not-found state, it is not fatal.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_modules(&self) -> Result<Vec<CourseModule>, StoreError>;

    async fn list_labs(&self) -> Result<Vec<Lab>, StoreError>;

    async fn find_module(&self, id: &ModuleId) -> Result<Option<CourseModule>, StoreError>;

    async fn find_lab(&self, id: &LabId) -> Result<Option<Lab>, StoreError>;

    /// Number of modules in the catalog, for progress totals.
    async fn module_count(&self) -> Result<usize, StoreError>;

    /// Number of labs in the catalog, for progress totals.
    async fn lab_count(&self) -> Result<usize, StoreError>;
}
