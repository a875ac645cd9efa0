//! GraphQL-over-HTTP adapters.
//!
//! One endpoint, `POST {query, variables}` bodies, `{data, errors}`
//! envelopes, and a bearer authorization header once a session token is
//! held. The remote ports (`AuthPort`, `UserDirectoryPort`) are thin
//! wrappers over this client.

mod auth;
mod client;
mod user_directory;

pub use auth::GraphqlAuth;
pub use client::{GraphqlClient, GraphqlConfig, GraphqlError};
pub use user_directory::GraphqlUserDirectory;
