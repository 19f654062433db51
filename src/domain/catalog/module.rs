//! Course module entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ModuleId;

use super::Difficulty;

/// A video-based lesson unit.
///
/// Seeded at startup, never mutated or deleted. Per-user completion is
/// not stored here; see `ModuleView`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    /// Human-readable duration, e.g. "45 min".
    pub duration: String,
    pub difficulty: Difficulty,
    pub category: String,
    /// Lesson body text shown alongside the video.
    pub content: String,
    /// Reference to the lesson video.
    pub video_url: String,
}
