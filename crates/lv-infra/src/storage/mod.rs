//! Key-value store adapters.

mod file;
mod memory;

pub use file::{FileKeyValueStore, DEFAULT_STORE_FILE};
pub use memory::MemoryKeyValueStore;
