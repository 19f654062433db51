//! Catalog error types.

use thiserror::Error;

use crate::domain::foundation::{LabId, ModuleId, StoreError, ValidationError};

/// Errors from catalog lookups and submissions.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Module not found: {0}")]
    ModuleNotFound(ModuleId),

    #[error("Lab not found: {0}")]
    LabNotFound(LabId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
