//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    domain::{
        inquiries::{InquiriesService, LocalInquiriesService},
        listings::{ListingsService, LocalListingsService},
    },
    session::{LocalSessionService, SessionService},
    storage::{FileStore, LocalStore, MemoryStore, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open data directory")]
    Storage(#[source] StoreError),
}

/// Wired services sharing one [`LocalStore`].
#[derive(Clone)]
pub struct AppContext {
    pub sessions: Arc<dyn SessionService>,
    pub listings: Arc<dyn ListingsService>,
    pub inquiries: Arc<dyn InquiriesService>,
}

impl AppContext {
    /// Context over a throwaway in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Context over a file-backed store rooted at `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, AppInitError> {
        let store = FileStore::open(data_dir).map_err(AppInitError::Storage)?;

        Ok(Self::with_store(Arc::new(store)))
    }

    /// Wire every service over the given store.
    #[must_use]
    pub fn with_store(store: Arc<dyn LocalStore>) -> Self {
        Self {
            sessions: Arc::new(LocalSessionService::new(store.clone())),
            listings: Arc::new(LocalListingsService::new(store.clone())),
            inquiries: Arc::new(LocalInquiriesService::new(store)),
        }
    }
}
