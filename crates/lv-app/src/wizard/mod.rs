//! Sign-up wizard container.
//!
//! Wraps the pure `StepFlow` accumulator with what the domain cannot do
//! alone: the remote submission, the at-most-once guard, reentrancy
//! protection and close-time cancellation.

mod error;
mod signup_wizard;

pub use error::SignupError;
pub use signup_wizard::{SignupWizard, StepOutcome};
