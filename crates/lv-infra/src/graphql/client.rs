use std::sync::RwLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use lv_core::user::AccessToken;

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlConfig {
    pub endpoint: String,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/graphql".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

mod duration_secs {
    use super::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

/// GraphQL transport and operation errors.
#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("operation failed: {0}")]
    Remote(String),

    #[error("response carried no data")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<Vec<RemoteError>>,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    message: String,
}

/// Shared HTTP client for the GraphQL endpoint.
///
/// Holds the bearer token of the current session; the session layer swaps
/// it on sign-in/sign-out and every subsequent request carries it.
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: RwLock<Option<AccessToken>>,
}

impl GraphqlClient {
    pub fn new(config: GraphqlConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: Option<AccessToken>) {
        *self.token.write().unwrap() = token;
    }

    /// Execute one operation and unwrap its envelope.
    ///
    /// GraphQL-level errors come back as [`GraphqlError::Remote`] with the
    /// messages joined; they are whole-operation failures, never field
    /// errors.
    pub async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, GraphqlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }));

        let token = self.token.read().unwrap().clone();
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GraphqlError::Status(status));
        }

        let envelope: Envelope<T> = response.json().await?;
        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let joined = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                debug!(error = %joined, "graphql operation failed");
                return Err(GraphqlError::Remote(joined));
            }
        }
        envelope.data.ok_or(GraphqlError::MissingData)
    }
}
