//! Session domain - server-side login sessions.

mod session;

pub use session::Session;
