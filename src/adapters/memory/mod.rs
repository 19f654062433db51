//! In-memory store adapters.
//!
//! The user and catalog stores are read-only after seeding and need no
//! locking; the progress and session stores guard their state with
//! `tokio::sync::RwLock`, keeping every operation a short critical
//! section with no await held across the lock.

mod catalog_store;
mod progress_store;
mod session_store;
mod user_store;

pub use catalog_store::InMemoryCatalogStore;
pub use progress_store::InMemoryProgressStore;
pub use session_store::InMemorySessionStore;
pub use user_store::InMemoryUserStore;
