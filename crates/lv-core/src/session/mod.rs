//! Session domain state.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Lifecycle of the client session.
///
/// Starts in `Loading` while the persisted session is being restored, then
/// settles into `Authenticated` or `Anonymous`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionState {
    Loading,
    Authenticated { user: UserProfile },
    Anonymous,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}
