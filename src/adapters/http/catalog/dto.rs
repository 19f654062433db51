//! HTTP DTOs for catalog endpoints.
//!
//! The domain views are already designed for serialization, so listing
//! and detail endpoints return them directly.

pub use crate::domain::catalog::{LabView, ModuleView};

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Difficulty;

/// Admin module submission body. Only the title is required; the rest
/// of the descriptor is free-form until a durable content pipeline
/// exists.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModuleRequest {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub video_url: Option<String>,
}

/// Admin lab submission body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabRequest {
    pub title: String,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    pub simulation_url: Option<String>,
}

/// Acknowledgement for a submission: the generated id, no persistence
/// guarantee.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: id.into(),
        }
    }
}
