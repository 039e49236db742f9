// src/infrastructure/storage/memory.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::storage::KeyValueStorage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// Process-local storage, used for tests and `--ephemeral` runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::Storage(format!("Read lock error: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::Storage(format!("Write lock error: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
