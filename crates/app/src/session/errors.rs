//! Session service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Email or secret failed basic well-formedness checks.
    #[error("invalid {0}")]
    Validation(&'static str),

    /// The operation needs a signed-in actor and there is none.
    #[error("no active session")]
    NotSignedIn,

    /// Profile kind does not match the signed-in actor's role.
    #[error("profile does not match actor role")]
    ProfileRoleMismatch,

    /// Persisting the session record failed.
    #[error("storage error")]
    Store(#[from] StoreError),
}
