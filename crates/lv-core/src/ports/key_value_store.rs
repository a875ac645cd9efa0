//! Key-value store port - abstracts local persistence.
//!
//! The session container persists its token and user record through this
//! trait; nothing else in the domain touches storage directly.

use anyhow::Result;
use async_trait::async_trait;

/// Small string key-value store, the shape of a mobile async-storage API.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Get a value, `None` when the key was never set.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Set or overwrite a value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Drop everything.
    async fn clear(&self) -> Result<()>;
}
