//! Error types for store operations.

use thiserror::Error;

/// Errors raised by [`crate::store::TaskStore`] operations.
///
/// `NotFound` is the only recoverable variant: the menu layer catches it
/// and prints a message. I/O and serialization failures propagate as
/// fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no task with id '{id}'")]
    NotFound { id: u64 },

    #[error("store I/O failure")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize task store")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(id: u64) -> Self {
        StoreError::NotFound { id }
    }

    /// True for the recoverable "referenced task does not exist" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
