//! Password reset use case.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use lv_core::form::StepValues;
use lv_core::ports::AuthPort;
use lv_core::signup::schemas;
use lv_core::user::field;
use lv_core::validation::FieldErrorMap;

/// Password reset errors.
#[derive(Debug, Error)]
pub enum PasswordResetError {
    #[error("password reset validation failed: {0}")]
    Validation(FieldErrorMap),

    #[error("password reset request failed")]
    Remote(#[source] anyhow::Error),
}

/// Use case for the forgot-password form.
///
/// Validates the address and asks the server to start a reset.
pub struct RequestPasswordReset {
    auth: Arc<dyn AuthPort>,
}

impl RequestPasswordReset {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, email: &str) -> Result<(), PasswordResetError> {
        let values = StepValues::new().with(field::EMAIL, email);
        schemas::forgot_password()
            .validate(&values)
            .map_err(PasswordResetError::Validation)?;

        self.auth
            .request_password_reset(email)
            .await
            .map_err(PasswordResetError::Remote)?;

        info!("password reset requested");
        Ok(())
    }
}
