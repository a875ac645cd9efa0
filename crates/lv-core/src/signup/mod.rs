//! Sign-up wizard domain.
//!
//! [`StepFlow`] is the pure step accumulator: an ordered sequence of steps,
//! a draft that grows by one validated merge per completed step, and a
//! terminal `Complete` state. Submission (the remote call) lives in the
//! application layer; this module only decides when the flow is ready.

mod error;
mod flow;
pub mod schemas;
mod state;

pub use error::AdvanceError;
pub use flow::{Progress, StepFlow};
pub use state::WizardState;
