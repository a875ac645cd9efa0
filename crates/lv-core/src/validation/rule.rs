use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::FieldValue;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url pattern is valid"));

/// One validation rule on one field.
///
/// Every check carries its own user-facing message. Format checks pass on
/// an absent or empty value; only `Required` rejects those, so optional
/// fields can still constrain their format when a value is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Check {
    Required { message: String },
    Email { message: String },
    Url { message: String },
    MinLen { len: usize, message: String },
    MaxLen { len: usize, message: String },
}

impl Check {
    /// Evaluate against a field value (`None` when the field was not
    /// submitted). Returns the message on failure.
    pub(crate) fn evaluate(&self, value: Option<&FieldValue>) -> Result<(), &str> {
        match self {
            Check::Required { message } => match value {
                Some(FieldValue::Text(s)) if !s.trim().is_empty() => Ok(()),
                Some(FieldValue::Flag(_)) => Ok(()),
                _ => Err(message),
            },
            Check::Email { message } => Self::check_text(value, message, |s| EMAIL_RE.is_match(s)),
            Check::Url { message } => Self::check_text(value, message, |s| URL_RE.is_match(s)),
            Check::MinLen { len, message } => {
                Self::check_text(value, message, |s| s.chars().count() >= *len)
            }
            Check::MaxLen { len, message } => {
                Self::check_text(value, message, |s| s.chars().count() <= *len)
            }
        }
    }

    fn check_text<'a>(
        value: Option<&FieldValue>,
        message: &'a str,
        ok: impl Fn(&str) -> bool,
    ) -> Result<(), &'a str> {
        match value {
            None => Ok(()),
            Some(FieldValue::Text(s)) if s.is_empty() => Ok(()),
            Some(FieldValue::Text(s)) if ok(s) => Ok(()),
            // A flag value can never satisfy a text-format rule
            _ => Err(message),
        }
    }
}
