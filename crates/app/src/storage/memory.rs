//! In-memory store.

use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use super::{LocalStore, StoreError};

/// Volatile [`LocalStore`] backed by a process-local map. Used by tests
/// and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn put_get_remove() -> TestResult {
        let store = MemoryStore::new();

        assert_eq!(store.get("k"), None);

        store.put("k", "v")?;

        assert_eq!(store.get("k"), Some("v".to_string()));

        store.put("k", "w")?;

        assert_eq!(store.get("k"), Some("w".to_string()));

        store.remove("k")?;

        assert_eq!(store.get("k"), None);

        Ok(())
    }

    #[test]
    fn removing_an_absent_key_is_fine() -> TestResult {
        let store = MemoryStore::new();

        store.remove("never-written")?;

        Ok(())
    }
}
