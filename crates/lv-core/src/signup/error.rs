use thiserror::Error;

use crate::validation::FieldErrorMap;

/// Why an `advance` (or `revisit`) call was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The step's values failed validation. The draft and the step
    /// pointer are unchanged.
    #[error("step validation failed: {0}")]
    Invalid(FieldErrorMap),

    /// The flow already reached `Complete`; advancing past it is a
    /// caller error.
    #[error("the wizard already completed all steps")]
    AlreadyComplete,

    /// Revisit target is not an already-visited step.
    #[error("step {target} is not behind the current step {current}")]
    StepNotBehind { target: usize, current: usize },
}
