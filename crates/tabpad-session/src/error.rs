//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabpad_storage::StorageError),

    #[error("Persisted tab list is empty")]
    EmptyTabList,
}
