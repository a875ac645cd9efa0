use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use lv_core::ports::UserDirectoryPort;
use lv_core::user::{CreatedUser, NewUser};

use crate::graphql::GraphqlClient;

const CREATE_USER_MUTATION: &str = r#"
mutation CreateUser($input: CreateUserInput!) {
  createUser(input: $input) {
    id
    firstName
  }
}
"#;

#[derive(Debug, Deserialize)]
struct CreateUserData {
    #[serde(rename = "createUser")]
    create_user: CreatedUser,
}

/// `UserDirectoryPort` over the GraphQL endpoint.
pub struct GraphqlUserDirectory {
    client: Arc<GraphqlClient>,
}

impl GraphqlUserDirectory {
    pub fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectoryPort for GraphqlUserDirectory {
    async fn create_user(&self, user: &NewUser) -> anyhow::Result<CreatedUser> {
        let data: CreateUserData = self
            .client
            .execute(CREATE_USER_MUTATION, json!({ "input": user }))
            .await?;
        Ok(data.create_user)
    }
}
