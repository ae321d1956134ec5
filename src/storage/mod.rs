use crate::{domain::Snapshot, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStore;
pub use memory_storage::MemoryStore;

/// Storage trait for persisting board snapshots
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Prepares the backend (directories, availability checks)
    async fn initialize(&self) -> Result<()>;

    /// Replaces the stored snapshot
    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()>;

    /// Loads the stored snapshot, `None` when nothing has been saved yet
    async fn load_snapshot(&self) -> Result<Option<Snapshot>>;
}
