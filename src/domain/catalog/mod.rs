//! Catalog domain - course modules, labs, and their per-user views.
//!
//! Catalog items are immutable reference data seeded at startup; they
//! carry no completion state. Completion is a per-user overlay applied
//! when building `ModuleView`/`LabView` read models.

mod difficulty;
mod error;
mod lab;
mod module;
mod views;

pub use difficulty::Difficulty;
pub use error::CatalogError;
pub use lab::Lab;
pub use module::CourseModule;
pub use views::{LabView, ModuleView};
