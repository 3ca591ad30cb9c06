//! Error types for filegate

use thiserror::Error;

/// Result type alias
pub type FsResult<T> = Result<T, FsError>;

/// Main error type.
///
/// Whole-call failures only: per-entry metadata failures during enumeration
/// are absorbed by defaulting the affected fields, and a deadline overrun is
/// reported through `DirectoryListing::complete`, not through an error.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Platform failure: {0}")]
    Platform(String),
}

impl FsError {
    /// Whether the operation may succeed if simply retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FsError::Network(_))
    }
}
