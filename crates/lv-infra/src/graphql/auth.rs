use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use lv_core::ports::AuthPort;
use lv_core::user::{AccessToken, UserProfile};

use crate::graphql::GraphqlClient;

const LOGIN_MUTATION: &str = r#"
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
  }
}
"#;

const CURRENT_USER_QUERY: &str = r#"
query CurrentUser {
  currentUser {
    id
    firstName
    lastName
    email
    avatar
  }
}
"#;

const REQUEST_PASSWORD_RESET_MUTATION: &str = r#"
mutation RequestPasswordReset($email: String!) {
  requestPasswordReset(email: $email)
}
"#;

#[derive(Debug, Deserialize)]
struct LoginData {
    login: LoginPayload,
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    token: String,
}

#[derive(Debug, Deserialize)]
struct CurrentUserData {
    #[serde(rename = "currentUser")]
    current_user: UserProfile,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RequestPasswordResetData {
    #[serde(rename = "requestPasswordReset")]
    accepted: bool,
}

/// `AuthPort` over the GraphQL endpoint.
///
/// A successful login installs the token on the shared client, so the
/// follow-up `current_user` call (and everything after) is authorized.
pub struct GraphqlAuth {
    client: Arc<GraphqlClient>,
}

impl GraphqlAuth {
    pub fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthPort for GraphqlAuth {
    async fn login(&self, email: &str, password: &str) -> anyhow::Result<AccessToken> {
        let data: LoginData = self
            .client
            .execute(
                LOGIN_MUTATION,
                json!({ "email": email, "password": password }),
            )
            .await?;

        let token = AccessToken::new(data.login.token);
        self.client.set_token(Some(token.clone()));
        debug!("login succeeded, token installed");
        Ok(token)
    }

    async fn current_user(&self) -> anyhow::Result<UserProfile> {
        let data: CurrentUserData = self.client.execute(CURRENT_USER_QUERY, json!({})).await?;
        Ok(data.current_user)
    }

    async fn request_password_reset(&self, email: &str) -> anyhow::Result<()> {
        let _: RequestPasswordResetData = self
            .client
            .execute(REQUEST_PASSWORD_RESET_MUTATION, json!({ "email": email }))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use mockito::Server;

    use crate::graphql::GraphqlConfig;

    fn auth_for(server: &Server) -> GraphqlAuth {
        let client = GraphqlClient::new(GraphqlConfig {
            endpoint: format!("{}/graphql", server.url()),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        GraphqlAuth::new(Arc::new(client))
    }

    #[tokio::test]
    async fn login_returns_and_installs_the_token() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"variables":{"email":"ana@x.com","password":"secret1"}}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"login":{"token":"tok-1"}}}"#)
            .create_async()
            .await;
        let follow_up = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data":{"currentUser":{"id":"u-1","firstName":"Ana","lastName":"Lima","email":"ana@x.com","avatar":null}}}"#,
            )
            .create_async()
            .await;

        let auth = auth_for(&server);
        let token = auth.login("ana@x.com", "secret1").await.unwrap();
        assert_eq!(token.as_str(), "tok-1");

        let user = auth.current_user().await.unwrap();
        assert_eq!(user.first_name, "Ana");
        follow_up.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_login_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":null,"errors":[{"message":"invalid credentials"}]}"#)
            .create_async()
            .await;

        let auth = auth_for(&server);
        let err = auth.login("ana@x.com", "wrong").await.unwrap_err();

        assert!(err.to_string().contains("invalid credentials"));
    }

    #[tokio::test]
    async fn password_reset_unwraps_to_unit() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"requestPasswordReset":true}}"#)
            .create_async()
            .await;

        let auth = auth_for(&server);
        auth.request_password_reset("ana@x.com").await.unwrap();

        mock.assert_async().await;
    }
}
