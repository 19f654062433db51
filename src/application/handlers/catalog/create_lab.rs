//! CreateLabHandler - Command handler for admin lab submissions.
//!
//! Same non-durable contract as module submissions: log the draft,
//! return a generated id, persist nothing.

use crate::domain::catalog::{CatalogError, Difficulty};
use crate::domain::foundation::{LabId, ValidationError};

/// Command carrying an admin-submitted lab draft.
#[derive(Debug, Clone)]
pub struct CreateLabCommand {
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub objectives: Vec<String>,
    pub simulation_url: Option<String>,
}

/// Handler acknowledging lab submissions.
pub struct CreateLabHandler;

impl CreateLabHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CreateLabCommand) -> Result<LabId, CatalogError> {
        if cmd.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }

        let id = LabId::generate();
        tracing::info!(
            lab_id = %id,
            title = %cmd.title,
            objectives = cmd.objectives.len(),
            "lab draft received (not persisted)"
        );
        Ok(id)
    }
}

impl Default for CreateLabHandler {
    fn default() -> Self {
        Self::new()
    }
}
