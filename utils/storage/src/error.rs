use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a [`FileStorage`](crate::FileStorage).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The path is absolute or climbs out of the storage root.
    #[error("path escapes the storage root: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Result alias for storage operations.
pub type Result<T, E = StorageError> = core::result::Result<T, E>;
