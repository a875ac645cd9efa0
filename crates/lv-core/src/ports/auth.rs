//! Authentication port - remote sign-in operations.

use anyhow::Result;
use async_trait::async_trait;

use crate::user::{AccessToken, UserProfile};

/// Remote authentication operations consumed by the session container.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken>;

    /// Fetch the profile of the user the current token belongs to.
    async fn current_user(&self) -> Result<UserProfile>;

    /// Ask the server to start a password reset for the given address.
    async fn request_password_reset(&self, email: &str) -> Result<()>;
}
