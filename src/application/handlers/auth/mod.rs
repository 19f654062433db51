//! Authentication handlers: login, current session, logout.

mod current_session;
mod login;
mod logout;

pub use current_session::CurrentSessionHandler;
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::LogoutHandler;
