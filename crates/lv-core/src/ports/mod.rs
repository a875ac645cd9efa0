//! Ports: contracts the application layer depends on.
//!
//! Implementations live in the infrastructure layer (HTTP client,
//! key-value stores). Use cases only ever see these traits.

mod auth;
mod key_value_store;
mod user_directory;

pub use auth::AuthPort;
pub use key_value_store::KeyValueStorePort;
pub use user_directory::UserDirectoryPort;
