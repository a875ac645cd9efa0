//! User directory port - the remote create-user operation.

use anyhow::Result;
use async_trait::async_trait;

use crate::user::{CreatedUser, NewUser};

/// Remote user directory.
///
/// One outbound operation: persist a fully accumulated sign-up record.
/// Transport and schema are an adapter concern; failures come back as a
/// whole-operation error, never as field errors.
#[async_trait]
pub trait UserDirectoryPort: Send + Sync {
    /// Create a user account from a complete sign-up record.
    async fn create_user(&self, user: &NewUser) -> Result<CreatedUser>;
}
