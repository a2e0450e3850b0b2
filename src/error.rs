//! Error types for snapshot storage.
//!
//! Storage failures never escalate: reads that fail fall back to the
//! default AppData, writes that fail are logged and dropped.

use thiserror::Error;

/// Errors raised by a persistence slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse stored snapshot: {0}")]
    Parse(String),

    #[error("Failed to serialize app data: {0}")]
    Serialize(String),

    #[error("Could not find home directory")]
    HomeNotFound,

    #[error("Lock poisoned")]
    LockPoisoned,
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}
