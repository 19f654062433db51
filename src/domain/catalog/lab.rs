//! Lab exercise entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LabId;

use super::Difficulty;

/// A simulated interactive exercise.
///
/// Seeded at startup, never mutated or deleted. Per-user completion is
/// not stored here; see `LabView`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lab {
    pub id: LabId,
    pub title: String,
    pub description: String,
    /// Human-readable estimate, e.g. "30 min".
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub category: String,
    /// Ordered list of objectives the student works through.
    pub objectives: Vec<String>,
    /// Reference to the external lab simulation.
    pub simulation_url: String,
}
