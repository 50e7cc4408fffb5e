//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be opened or read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, invalid UTF-8, unreadable header).
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed JSON or not an array of objects.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    /// Path of the input the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::CsvParse { path, .. }
            | Self::JsonParse { path, .. } => path,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
