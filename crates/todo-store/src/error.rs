//! Store Errors

use thiserror::Error;

use crate::storage::StorageError;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted value is not a JSON array of todo items
    #[error("persisted todo list is malformed: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    /// The list could not be encoded
    #[error("failed to serialize todo list: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading the persisted value failed
    #[error("failed to load todo list: {0}")]
    Load(#[source] StorageError),

    /// Writing the list failed; the in-memory list is still current
    #[error("failed to persist todo list: {0}")]
    Persist(#[source] StorageError),
}
