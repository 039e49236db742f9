// src/application/services/persistence.rs
//! Whole-list load/save shared by the stores.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::error::DomainError;
use crate::domain::services::storage::KeyValueStorage;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Read the list stored under `key`.
///
/// Missing, unreadable or corrupt data all yield an empty list: corruption is
/// treated as "nothing saved".
#[instrument(skip(storage), level = "debug")]
pub(crate) fn load_list<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("Nothing stored under {}", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Cannot read {}: {}. Starting empty.", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            debug!("Loaded {} entries from {}", items.len(), key);
            items
        }
        Err(e) => {
            warn!("Ignoring corrupt data under {}: {}", key, e);
            Vec::new()
        }
    }
}

/// Serialize the full list and write it under `key`.
#[instrument(skip(storage, items), level = "debug", fields(count = items.len()))]
pub(crate) fn save_list<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    items: &[T],
) -> ApplicationResult<()> {
    let to_storage_error = |source: DomainError| ApplicationError::Storage {
        key: key.to_string(),
        source,
    };
    let json = serde_json::to_string(items).map_err(|e| to_storage_error(e.into()))?;
    storage.set(key, &json).map_err(to_storage_error)
}

/// Millisecond timestamp for a new id, bumped until `taken` reports it free.
pub(crate) fn unique_millis(now: DateTime<Utc>, taken: impl Fn(i64) -> bool) -> i64 {
    let mut millis = now.timestamp_millis();
    while taken(millis) {
        millis += 1;
    }
    millis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;

    #[test]
    fn given_corrupt_blob_when_load_list_then_empty() {
        let storage = MemoryStorage::new();
        storage.set("k", "{not json").unwrap();

        let items: Vec<String> = load_list(&storage, "k");
        assert!(items.is_empty());
    }

    #[test]
    fn given_saved_list_when_load_list_then_round_trips() {
        let storage = MemoryStorage::new();
        let items = vec!["a".to_string(), "b".to_string()];
        save_list(&storage, "k", &items).unwrap();

        let loaded: Vec<String> = load_list(&storage, "k");
        assert_eq!(loaded, items);
    }

    #[test]
    fn given_taken_millis_when_unique_millis_then_bumps() {
        let now = DateTime::from_timestamp_millis(1_000).unwrap();
        let millis = unique_millis(now, |m| m == 1_000 || m == 1_001);
        assert_eq!(millis, 1_002);
    }
}
