//! Auth session container.

mod error;
mod session_manager;

pub use error::SessionError;
pub use session_manager::{SessionManager, TOKEN_KEY, USER_KEY};
