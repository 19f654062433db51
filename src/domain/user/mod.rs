//! User domain - accounts, public projections, and progress summaries.

mod account;
mod summary;

pub use account::{PublicUser, UserAccount};
pub use summary::ProgressSummary;
