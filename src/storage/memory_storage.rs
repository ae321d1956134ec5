use crate::{
    domain::Snapshot,
    error::{BoardError, Result},
    storage::BoardStore,
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex, MutexGuard,
    },
};

/// Key/value store holding the snapshot as a JSON string, the way a browser's
/// local storage does
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    unavailable: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub const KEY: &'static str = "tasks";

    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw stored text, malformed or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(Self::KEY.to_string(), raw.into());
        }
        store
    }

    /// Makes every operation fail, as when storage is denied or over quota
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Raw stored text
    pub fn raw(&self) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(Self::KEY).cloned())
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BoardError::StorageError("storage is unavailable".to_string()));
        }
        self.entries
            .lock()
            .map_err(|_| BoardError::StorageError("storage lock poisoned".to_string()))
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn initialize(&self) -> Result<()> {
        self.entries().map(|_| ())
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let json = snapshot.to_json()?;
        self.entries()?.insert(Self::KEY.to_string(), json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        let raw = self.entries()?.get(Self::KEY).cloned();
        match raw {
            Some(json) => Ok(Some(Snapshot::from_json(&json)?)),
            None => Ok(None),
        }
    }
}
