//! Listing service errors.

use hevea::listings::ValidationError;
use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ListingsServiceError {
    /// Only farmers own listing partitions.
    #[error("only farmers can manage listings")]
    NotAFarmer,

    /// The draft failed field validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persisting the partition failed.
    #[error("storage error")]
    Store(#[from] StoreError),
}
