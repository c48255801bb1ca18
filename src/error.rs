//! Error types for update-sdk-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, UpdateError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from manifest rewrites.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Manifest file does not exist.
    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Write was already committed or skipped.
    #[error("Write to {0} already finished")]
    AlreadyCommitted(PathBuf),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Renaming the temporary file over the manifest failed.
    #[error("Failed to replace manifest: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for update-sdk-version operations.
pub type Result<T> = std::result::Result<T, UpdateError>;
