//! Error types for pocketbook-sync
//!
//! Two failure classes matter here: fatal session errors (missing or
//! unwritable device catalog, failed commits) and recoverable per-book
//! conditions. Only the former are modeled as errors; a book that cannot
//! be resolved on the device is reported through `SyncOutcome`, not `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a device sync session
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("device catalog not found (searched under {root:?})")]
    CatalogNotFound { root: PathBuf },

    #[error("invalid device catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for SyncError {
    fn from(err: rusqlite::Error) -> Self {
        SyncError::Other(err.to_string())
    }
}

impl SyncError {
    /// Create an error for a failed catalog database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        SyncError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed transaction operation
    pub fn transaction(operation: &str, error: impl std::fmt::Display) -> Self {
        SyncError::FailedOperation {
            operation: format!("{} transaction", operation),
            reason: error.to_string(),
        }
    }

    /// Create an error for an unopenable or malformed catalog
    pub fn invalid_catalog(reason: impl std::fmt::Display) -> Self {
        SyncError::InvalidCatalog {
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for pocketbook-sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
