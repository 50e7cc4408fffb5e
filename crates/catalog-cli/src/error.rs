//! Command failures and their process exit codes.

use std::path::PathBuf;

use catalog_ingest::IngestError;
use catalog_report::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input file is missing (checked up front by the JSON conversion).
    #[error("{path} not found")]
    InputNotFound { path: PathBuf },

    /// Input could not be read or parsed.
    #[error("failed to read input: {0}")]
    InputRead(#[from] IngestError),

    /// Output could not be produced or written.
    #[error("failed to write output: {0}")]
    OutputWrite(#[from] ReportError),

    /// Logging could not be set up, usually an unopenable `--log-file`.
    #[error("failed to initialize logging: {source}")]
    LogInit {
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputNotFound { .. } => 1,
            CliError::InputRead(_) => 2,
            CliError::OutputWrite(_) => 3,
            CliError::LogInit { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let missing = CliError::InputNotFound {
            path: PathBuf::from("lego-sets.csv"),
        };
        let read = CliError::from(IngestError::FileNotFound {
            path: PathBuf::from("lego-sets.csv"),
        });
        let write = CliError::from(ReportError::Io {
            operation: "create",
            path: PathBuf::from("catalog.tex"),
            source: std::io::Error::other("disk full"),
        });

        assert_eq!(missing.exit_code(), 1);
        assert_eq!(read.exit_code(), 2);
        assert_eq!(write.exit_code(), 3);
        let logging = CliError::LogInit {
            source: std::io::Error::other("permission denied"),
        };
        assert_eq!(logging.exit_code(), 4);
        assert_eq!(missing.to_string(), "lego-sets.csv not found");
    }
}
