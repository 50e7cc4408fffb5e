//! Input format detection and catalog loading entry points.

use std::fs::File;
use std::path::Path;

use catalog_model::Catalog;
use tracing::{info, info_span};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::json::read_json_catalog;
use crate::normalize::normalize_catalog;

/// Source format, chosen from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.csv` files are CSV; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

pub(crate) fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Fail with [`IngestError::FileNotFound`] unless `path` exists.
pub fn ensure_input_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Load rows without cleaning them: CSV rows keep untrimmed text, JSON is
/// taken as written. Only rows whose cells are all empty are dropped.
pub fn load_raw_catalog(path: &Path) -> Result<Catalog> {
    let format = InputFormat::from_path(path);
    let span = info_span!("ingest", path = %path.display(), format = ?format, normalize = false);
    let _guard = span.enter();
    let catalog = match format {
        InputFormat::Csv => read_csv_table(path)?.into_catalog(),
        InputFormat::Json => read_json_catalog(path)?,
    };
    info!(records = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Load and normalize a catalog. CSV rows go through the normalizer; a JSON
/// catalog is already normalized and passes through unchanged.
pub fn load_normalized_catalog(path: &Path) -> Result<Catalog> {
    let format = InputFormat::from_path(path);
    let span = info_span!("ingest", path = %path.display(), format = ?format, normalize = true);
    let _guard = span.enter();
    let catalog = match format {
        InputFormat::Csv => {
            let table = read_csv_table(path)?;
            normalize_catalog(&table.into_catalog())
        }
        InputFormat::Json => read_json_catalog(path)?,
    };
    info!(records = catalog.len(), "loaded catalog");
    Ok(catalog)
}
