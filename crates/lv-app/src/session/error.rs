use thiserror::Error;

use lv_core::validation::FieldErrorMap;

/// Session container errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The sign-in form values failed validation.
    #[error("sign-in validation failed: {0}")]
    Validation(FieldErrorMap),

    /// A remote auth operation failed.
    #[error("authentication failed")]
    Remote(#[source] anyhow::Error),

    /// Local persistence failed.
    #[error("session storage failed")]
    Storage(#[source] anyhow::Error),
}

impl SessionError {
    /// The per-field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            SessionError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
