//! CreateModuleHandler - Command handler for admin module submissions.
//!
//! The platform has no durable content pipeline yet: the contract is
//! "acknowledge receipt and return a generated id". The draft is logged
//! and dropped; listings are not guaranteed to include it.

use crate::domain::catalog::{CatalogError, Difficulty};
use crate::domain::foundation::{ModuleId, ValidationError};

/// Command carrying an admin-submitted module draft.
#[derive(Debug, Clone)]
pub struct CreateModuleCommand {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub video_url: Option<String>,
}

/// Handler acknowledging module submissions.
pub struct CreateModuleHandler;

impl CreateModuleHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CreateModuleCommand) -> Result<ModuleId, CatalogError> {
        if cmd.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }

        let id = ModuleId::generate();
        tracing::info!(
            module_id = %id,
            title = %cmd.title,
            "module draft received (not persisted)"
        );
        Ok(id)
    }
}

impl Default for CreateModuleHandler {
    fn default() -> Self {
        Self::new()
    }
}
