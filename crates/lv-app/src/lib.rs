//! Levare application layer.
//!
//! Stateful containers that own domain state and drive the ports: the
//! sign-up wizard, the auth session, and the notification containers.

pub mod notice;
pub mod password;
pub mod session;
pub mod wizard;

pub use session::{SessionError, SessionManager};
pub use wizard::{SignupError, SignupWizard, StepOutcome};
