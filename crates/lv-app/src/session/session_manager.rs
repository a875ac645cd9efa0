use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use lv_core::form::StepValues;
use lv_core::ports::{AuthPort, KeyValueStorePort};
use lv_core::session::SessionState;
use lv_core::signup::schemas;
use lv_core::user::{field, AccessToken, UserProfile};

use crate::session::SessionError;

/// Storage key for the persisted bearer token.
pub const TOKEN_KEY: &str = "@Levare:token";
/// Storage key for the persisted user record.
pub const USER_KEY: &str = "@Levare:user";

/// App-scoped session container.
///
/// Owns the session state machine (`Loading → Authenticated | Anonymous`)
/// and is the only writer of the persisted token/user pair. Both ports are
/// injected; nothing here reaches for ambient globals.
pub struct SessionManager {
    auth: Arc<dyn AuthPort>,
    store: Arc<dyn KeyValueStorePort>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthPort>, store: Arc<dyn KeyValueStorePort>) -> Self {
        Self {
            auth,
            store,
            state: RwLock::new(SessionState::Loading),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.state.read().await.is_signed_in()
    }

    /// Restore the persisted session, settling `Loading` into
    /// `Authenticated` or `Anonymous`.
    ///
    /// A corrupt stored user record is dropped with a warning rather than
    /// locking the app out of the sign-in flow.
    pub async fn restore(&self) -> Result<SessionState, SessionError> {
        let token = self
            .store
            .get_item(TOKEN_KEY)
            .await
            .map_err(SessionError::Storage)?;
        let stored_user = self
            .store
            .get_item(USER_KEY)
            .await
            .map_err(SessionError::Storage)?;

        let next = match (token, stored_user) {
            (Some(_), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => SessionState::Authenticated { user },
                Err(err) => {
                    warn!(error = %err, "stored user record is corrupt, discarding session");
                    self.clear_persisted().await?;
                    SessionState::Anonymous
                }
            },
            _ => SessionState::Anonymous,
        };

        debug!(signed_in = next.is_signed_in(), "session restored");
        *self.state.write().await = next.clone();
        Ok(next)
    }

    /// Sign in with credentials: validate, exchange for a token, fetch the
    /// profile and persist both.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, SessionError> {
        let values = StepValues::new()
            .with(field::EMAIL, email)
            .with(field::PASSWORD, password);
        schemas::sign_in()
            .validate(&values)
            .map_err(SessionError::Validation)?;

        let token = self
            .auth
            .login(email, password)
            .await
            .map_err(SessionError::Remote)?;
        let user = self
            .auth
            .current_user()
            .await
            .map_err(SessionError::Remote)?;

        self.store
            .set_item(TOKEN_KEY, token.as_str())
            .await
            .map_err(SessionError::Storage)?;
        let raw_user = serde_json::to_string(&user)
            .map_err(|err| SessionError::Storage(err.into()))?;
        self.store
            .set_item(USER_KEY, &raw_user)
            .await
            .map_err(SessionError::Storage)?;

        info!(user_id = %user.id, "signed in");
        *self.state.write().await = SessionState::Authenticated { user: user.clone() };
        Ok(user)
    }

    /// Sign out: drop the persisted pair and go `Anonymous`.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.clear_persisted().await?;
        *self.state.write().await = SessionState::Anonymous;
        info!("signed out");
        Ok(())
    }

    /// The persisted bearer token, if any. Adapters use this to build
    /// their authorization header.
    pub async fn access_token(&self) -> Result<Option<AccessToken>, SessionError> {
        let token = self
            .store
            .get_item(TOKEN_KEY)
            .await
            .map_err(SessionError::Storage)?;
        Ok(token.map(AccessToken::new))
    }

    async fn clear_persisted(&self) -> Result<(), SessionError> {
        self.store
            .remove_item(TOKEN_KEY)
            .await
            .map_err(SessionError::Storage)?;
        self.store
            .remove_item(USER_KEY)
            .await
            .map_err(SessionError::Storage)
    }
}
