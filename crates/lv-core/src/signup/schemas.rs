//! Canonical schemas for the sign-up, sign-in and password-reset forms.
//!
//! Step screens own their schema; these constructors are the stock ones
//! the app ships. Messages are user-facing.

use crate::user::field;
use crate::validation::Schema;

/// Step 0: name.
pub fn step_one() -> Schema {
    Schema::builder()
        .field(field::FIRST_NAME, |f| {
            f.required("The first name is required")
        })
        .field(field::LAST_NAME, |f| f.required("The last name is required"))
        .build()
}

/// Step 1: credentials.
pub fn step_two() -> Schema {
    Schema::builder()
        .field(field::EMAIL, |f| {
            f.required("The email is required").email("Invalid email")
        })
        .field(field::PASSWORD, |f| {
            f.required("The password is required")
                .min_len(6, "The password must have at least 6 characters")
        })
        .build()
}

/// Step 2: professional profile. Everything here is optional.
pub fn step_three() -> Schema {
    Schema::builder()
        .field(field::CONTACT_LINK, |f| {
            f.url("The contact link must be a valid url")
        })
        .field(field::COMPANY, |f| {
            f.max_len(50, "The company must have at most 50 characters")
        })
        .build()
}

/// Sign-in form.
pub fn sign_in() -> Schema {
    Schema::builder()
        .field(field::EMAIL, |f| {
            f.required("The email is required").email("Invalid email")
        })
        .field(field::PASSWORD, |f| f.required("The password is required"))
        .build()
}

/// Forgot-password form.
pub fn forgot_password() -> Schema {
    Schema::builder()
        .field(field::EMAIL, |f| {
            f.required("The email is required").email("Invalid email")
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::StepValues;

    #[test]
    fn step_three_is_fully_optional() {
        assert!(step_three().validate(&StepValues::new()).is_ok());
    }

    #[test]
    fn step_three_still_checks_formats_when_present() {
        let values = StepValues::new()
            .with("contactLink", "not a url")
            .with("company", "x".repeat(51));

        let errors = step_three().validate(&values).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("contactLink"),
            Some("The contact link must be a valid url")
        );
    }

    #[test]
    fn sign_in_requires_both_fields() {
        let errors = sign_in().validate(&StepValues::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
