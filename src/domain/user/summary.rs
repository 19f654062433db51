//! Aggregate progress summary.

use serde::{Deserialize, Serialize};

/// Per-user progress rollup.
///
/// Always derived at read time from the progress store and catalog
/// totals, never persisted, so the counts cannot drift from the
/// item-level completion flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub modules_completed: usize,
    pub total_modules: usize,
    pub labs_completed: usize,
    pub total_labs: usize,
    pub certificates: Vec<String>,
}

impl ProgressSummary {
    pub fn new(
        modules_completed: usize,
        total_modules: usize,
        labs_completed: usize,
        total_labs: usize,
        certificates: Vec<String>,
    ) -> Self {
        Self {
            modules_completed,
            total_modules,
            labs_completed,
            total_labs,
            certificates,
        }
    }
}
