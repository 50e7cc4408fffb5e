//! Writing rendered documents to disk.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ReportError, Result};

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `text` to `path`.
///
/// The text goes to a sibling temp file that is renamed over the target once
/// synced, so a failed write never leaves a truncated document behind.
/// Missing parent directories are created.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_synced(&temp_path, text) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ReportError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!(path = %path.display(), bytes = text.len(), "wrote document");
    Ok(())
}

fn write_synced(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ReportError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(text.as_bytes())
        .map_err(|e| ReportError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source: e,
        })?;
    file.sync_all().map_err(|e| ReportError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}
