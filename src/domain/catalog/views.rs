//! Per-user catalog read models.
//!
//! The catalog itself is shared, immutable reference data. These views
//! overlay one user's completion flags onto it; they are what listing
//! and detail endpoints return.

use serde::{Deserialize, Serialize};

use super::{CourseModule, Lab};

/// A course module as seen by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleView {
    #[serde(flatten)]
    pub module: CourseModule,
    pub completed: bool,
}

impl ModuleView {
    pub fn new(module: CourseModule, completed: bool) -> Self {
        Self { module, completed }
    }
}

/// A lab as seen by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabView {
    #[serde(flatten)]
    pub lab: Lab,
    pub completed: bool,
}

impl LabView {
    pub fn new(lab: Lab, completed: bool) -> Self {
        Self { lab, completed }
    }
}
