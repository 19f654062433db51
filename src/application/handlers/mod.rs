//! Command and query handlers.
//!
//! Handlers are constructed from `Arc<dyn Port>`s and expose a single
//! `handle` method. The HTTP adapter builds them per request from its
//! shared state.

pub mod auth;
pub mod catalog;
pub mod progress;

pub use auth::{CurrentSessionHandler, LoginCommand, LoginHandler, LoginResult, LogoutHandler};
pub use catalog::{
    CreateLabCommand, CreateLabHandler, CreateModuleCommand, CreateModuleHandler, GetLabHandler,
    GetModuleHandler, ListLabsHandler, ListModulesHandler,
};
pub use progress::{
    GetProgressSummaryHandler, MarkLabCompleteHandler, MarkModuleCompleteHandler,
};
