use thiserror::Error;

use lv_core::signup::AdvanceError;
use lv_core::validation::FieldErrorMap;

/// Wizard container errors.
#[derive(Debug, Error)]
pub enum SignupError {
    /// The step's values failed validation; nothing was merged and the
    /// step pointer did not move.
    #[error("step validation failed: {0}")]
    Validation(FieldErrorMap),

    /// Another `advance`/`submit` call is still in flight. Calls are
    /// strictly serialized; overlapping ones are refused, not queued.
    #[error("another wizard operation is already in flight")]
    Busy,

    /// The wizard was closed; pending results were discarded.
    #[error("the wizard was closed")]
    Closed,

    /// `advance` called in the terminal `Complete` state.
    #[error("the wizard already completed all steps")]
    AlreadyComplete,

    /// `submit` called before the last step completed.
    #[error("the wizard has not completed all steps yet")]
    NotComplete,

    /// The remote call already succeeded; submitting again would be a
    /// duplicate create-user call.
    #[error("the sign-up was already submitted")]
    AlreadySubmitted,

    /// Revisit target is not an already-visited step.
    #[error("step {target} is not behind the current step {current}")]
    StepNotBehind { target: usize, current: usize },

    /// The accumulated draft lacks required fields. Points at a schema
    /// misconfiguration, not user input.
    #[error("draft is missing required fields: {}", missing.join(", "))]
    IncompleteDraft { missing: Vec<&'static str> },

    /// The remote create-user call failed. The draft is preserved so the
    /// caller can retry explicitly.
    #[error("the sign-up submission failed")]
    Submission(#[source] anyhow::Error),
}

impl From<AdvanceError> for SignupError {
    fn from(err: AdvanceError) -> Self {
        match err {
            AdvanceError::Invalid(errors) => SignupError::Validation(errors),
            AdvanceError::AlreadyComplete => SignupError::AlreadyComplete,
            AdvanceError::StepNotBehind { target, current } => {
                SignupError::StepNotBehind { target, current }
            }
        }
    }
}

impl SignupError {
    /// The per-field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            SignupError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
