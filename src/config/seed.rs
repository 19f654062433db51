//! Seed data configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Seed data configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Path to the user seed JSON file. When unset, the compiled-in
    /// default seed is used.
    pub users_path: Option<PathBuf>,
}
