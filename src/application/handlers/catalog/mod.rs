//! Catalog handlers: listings, details, and admin submissions.

mod create_lab;
mod create_module;
mod get_lab;
mod get_module;
mod list_labs;
mod list_modules;

pub use create_lab::{CreateLabCommand, CreateLabHandler};
pub use create_module::{CreateModuleCommand, CreateModuleHandler};
pub use get_lab::GetLabHandler;
pub use get_module::GetModuleHandler;
pub use list_labs::ListLabsHandler;
pub use list_modules::ListModulesHandler;
