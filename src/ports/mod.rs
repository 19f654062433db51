//! Ports - contracts between the application core and the adapters.
//!
//! Every store the handlers touch is an async trait here, so the
//! in-memory adapters used today can be swapped for database-backed
//! ones without touching a handler.

mod catalog_store;
mod progress_store;
mod session_store;
mod token_signer;
mod user_store;

pub use catalog_store::CatalogStore;
pub use progress_store::ProgressStore;
pub use session_store::SessionStore;
pub use token_signer::TokenSigner;
pub use user_store::UserStore;
