//! File-based key-value store.
//!
//! Persists the whole map as one JSON file in the application data
//! directory, the local analogue of a mobile async-storage backend.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use lv_core::ports::KeyValueStorePort;

pub const DEFAULT_STORE_FILE: &str = ".levare_store";

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    // serializes every access to the backing file, readers included,
    // so a load never observes a half-written file
    io_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store with a custom file path.
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            io_lock: Mutex::new(()),
        }
    }

    /// Create a store with base dir and filename.
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create a store with defaults.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORE_FILE))
    }

    /// The per-user data directory for the app, when the platform has one.
    pub fn default_base_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("levare"))
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.store_file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.store_file_path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let items: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse store file: {}", e))?;
        Ok(items)
    }

    async fn save(&self, items: &BTreeMap<String, String>) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| anyhow::anyhow!("Failed to serialize store: {}", e))?;

        let mut file = fs::File::create(&self.store_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create store file: {}", e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write store file: {}", e))?;
        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync store file: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.io_lock.lock().await;
        Ok(self.load().await?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.io_lock.lock().await;
        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items).await
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.io_lock.lock().await;
        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.save(&items).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        let _guard = self.io_lock.lock().await;
        if self.store_file_path.exists() {
            fs::remove_file(&self.store_file_path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn get_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nonexistent.json"));

        assert_eq!(store.get_item("token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_and_get_survive_a_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = FileKeyValueStore::new(path.clone());
        store.set_item("@Levare:token", "abc").await.unwrap();

        let reopened = FileKeyValueStore::new(path);
        assert_eq!(
            reopened.get_item("@Levare:token").await.unwrap().as_deref(),
            Some("abc")
        );
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.json"));

        store.set_item("a", "1").await.unwrap();
        store.set_item("b", "2").await.unwrap();

        store.remove_item("a").await.unwrap();
        assert_eq!(store.get_item("a").await.unwrap(), None);
        assert_eq!(store.get_item("b").await.unwrap().as_deref(), Some("2"));

        store.clear().await.unwrap();
        assert_eq!(store.get_item("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_file_reads_as_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "").await.unwrap();

        let store = FileKeyValueStore::new(path);
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = FileKeyValueStore::new(path);
        let result = store.get_item("k").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn concurrent_readers_never_observe_a_half_written_file() {
        use std::sync::Arc;

        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(FileKeyValueStore::new(temp_dir.path().join("store.json")));

        let mut tasks = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.set_item(&format!("k{i}"), "value").await.unwrap();
                // a read racing the writes must parse cleanly
                store.get_item("k0").await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        for i in 0..8 {
            assert_eq!(
                store.get_item(&format!("k{i}")).await.unwrap().as_deref(),
                Some("value")
            );
        }
    }

    #[tokio::test]
    async fn with_defaults_appends_the_store_filename() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::with_defaults(temp_dir.path().to_path_buf());

        assert_eq!(
            store.store_file_path,
            temp_dir.path().join(DEFAULT_STORE_FILE)
        );
    }
}
