use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::StepValues;
use crate::user::field;

/// The accumulating sign-up record.
///
/// Holds the union of all fields from previously completed steps. Fields
/// belonging to not-yet-completed steps are simply absent from the map, so
/// the draft can tell "not yet entered" from "entered empty". Only the step
/// accumulator mutates a draft, once per successful step completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDraft {
    values: StepValues,
}

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one step's validated fields into the draft.
    ///
    /// Shallow merge, last-write-wins on overlapping keys. Resubmitting an
    /// earlier step therefore overwrites what it merged before instead of
    /// silently keeping stale values.
    pub fn merge(&mut self, values: &StepValues) {
        self.values.merge(values);
    }

    pub fn values(&self) -> &StepValues {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.values.text(name)
    }

    /// Fields the create-user call cannot do without that are still absent.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            field::FIRST_NAME,
            field::LAST_NAME,
            field::EMAIL,
            field::PASSWORD,
        ]
        .into_iter()
        .filter(|name| self.text(name).is_none())
        .collect()
    }
}

/// Draft-to-record conversion failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("draft is missing required fields: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// The complete record sent to the remote create-user operation.
///
/// Field names serialize exactly as the remote input expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_certified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl TryFrom<&UserDraft> for NewUser {
    type Error = DraftError;

    fn try_from(draft: &UserDraft) -> Result<Self, Self::Error> {
        let missing = draft.missing_required_fields();
        if !missing.is_empty() {
            return Err(DraftError::Incomplete { missing });
        }

        let text = |name: &str| draft.text(name).map(str::to_string);

        Ok(NewUser {
            // missing_required_fields() checked these are present
            first_name: text(field::FIRST_NAME).unwrap_or_default(),
            last_name: text(field::LAST_NAME).unwrap_or_default(),
            email: text(field::EMAIL).unwrap_or_default(),
            password: text(field::PASSWORD).unwrap_or_default(),
            contact_link: text(field::CONTACT_LINK),
            company: text(field::COMPANY),
            phone: text(field::PHONE),
            is_certified: draft.values.flag(field::IS_CERTIFIED).unwrap_or(false),
            avatar: text(field::AVATAR),
        })
    }
}
