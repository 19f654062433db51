//! Progress domain - per-user completion of catalog items.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{LabId, ModuleId};

/// Reference to a completable catalog item.
///
/// Completion state is keyed by `(UserId, ItemRef)` in the progress
/// store. Flags move in one direction only (incomplete to complete);
/// no reversal path exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ItemRef {
    Module(ModuleId),
    Lab(LabId),
}

impl ItemRef {
    pub fn is_module(&self) -> bool {
        matches!(self, ItemRef::Module(_))
    }

    pub fn is_lab(&self) -> bool {
        matches!(self, ItemRef::Lab(_))
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Module(id) => write!(f, "module/{}", id),
            ItemRef::Lab(id) => write!(f, "lab/{}", id),
        }
    }
}
