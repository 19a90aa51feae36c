//! Store error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the persistent store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error reading or writing a blob.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Key that cannot be mapped onto a blob name.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
    /// Value rejected before it was written.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    /// Value could not be encoded as JSON.
    #[error("Failed to encode value: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Write refused by the backing store.
    #[error("Write failed for '{0}'")]
    WriteFailed(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
