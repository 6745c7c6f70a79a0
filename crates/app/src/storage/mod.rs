//! Durable key-value storage
//!
//! Browser-local-storage-shaped persistence: string keys mapping to
//! UTF-8 JSON values, read and written synchronously. Reads fail open:
//! absent or malformed data is reported as absent, never as an error.

mod file;
pub mod keys;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use mockall::automock;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

/// Storage write errors. Reads cannot fail; see [`LocalStore::get`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("storage I/O error")]
    Io(#[source] std::io::Error),

    /// Record could not be encoded as JSON.
    #[error("failed to encode record")]
    Encode(#[source] serde_json::Error),
}

/// Synchronous key-value store scoped to one data directory (or to
/// process memory). Writes are last-write-wins with no cross-process
/// coordination.
#[automock]
pub trait LocalStore: Send + Sync {
    /// Raw value stored under `key`; absent or unreadable values read
    /// as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value in a
    /// single write.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be persisted.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Decode the record stored under `key`.
///
/// Malformed stored data is discarded with a warning and reads as
/// absent, so callers always recover to their default state.
pub fn read<T: DeserializeOwned>(store: &dyn LocalStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(key, %error, "discarding malformed stored record");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error when encoding or the underlying write fails.
pub fn write<T: Serialize>(store: &dyn LocalStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;

    store.put(key, &raw)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn read_recovers_from_malformed_json() -> TestResult {
        let store = MemoryStore::new();

        store.put("session_actor", "{not json")?;

        let value: Option<Vec<String>> = read(&store, "session_actor");

        assert_eq!(value, None);

        Ok(())
    }

    #[test]
    fn write_then_read_round_trips() -> TestResult {
        let store = MemoryStore::new();
        let record = vec!["a".to_string(), "b".to_string()];

        write(&store, "k", &record)?;

        let back: Option<Vec<String>> = read(&store, "k");

        assert_eq!(back, Some(record));

        Ok(())
    }
}
