//! Infrastructure adapters for the Levare client.
//!
//! Concrete implementations of the `lv-core` ports: the GraphQL HTTP
//! client behind the remote operations, and local key-value stores.

pub mod graphql;
pub mod storage;

pub use graphql::{GraphqlAuth, GraphqlClient, GraphqlConfig, GraphqlUserDirectory};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
