//! Storage layer
//!
//! Key/value storage for the planet list and settings. Native builds write
//! files under the data directory; the browser build keeps the same values
//! in localStorage.

pub mod local;

pub use local::LocalStorage;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// File or directory not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(e.to_string()),
            _ => StorageError::Io(e.to_string()),
        }
    }
}

impl StorageError {
    /// Missing data is an expected first-run condition, not a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
