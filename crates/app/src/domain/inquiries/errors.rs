//! Inquiry service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum InquiriesServiceError {
    /// Inquiry messages cannot be empty or whitespace-only.
    #[error("inquiry message cannot be empty")]
    EmptyMessage,

    /// Only farmers receive inquiries.
    #[error("only farmers receive inquiries")]
    NotAFarmer,

    /// Persisting the partition failed.
    #[error("storage error")]
    Store(#[from] StoreError),
}
