//! Report error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or writing a document.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Catalog could not be serialized to JSON.
    #[error("failed to serialize catalog: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temp file could not be moved over the target.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
