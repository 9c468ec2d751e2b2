//! Record store errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backing file exists but does not hold a valid collection
    #[error("corrupt data file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Collection could not be serialized
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Candidate could not be turned into a record
    #[error("invalid record: {0}")]
    InvalidRecord(#[source] serde_json::Error),

    /// Refusing to overwrite an existing data file
    #[error("data file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A writer panicked while holding the lock
    #[error("record store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
