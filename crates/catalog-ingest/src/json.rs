//! JSON catalogs: an array of objects with string or number values.

use std::io::BufReader;
use std::path::Path;

use catalog_model::Catalog;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::loader::open_input;

/// Reads a JSON catalog as-is. Values are not trimmed or coerced; `null`
/// fields are treated as absent.
pub fn read_json_catalog(path: &Path) -> Result<Catalog> {
    let file = open_input(path)?;
    let catalog: Catalog =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = catalog.len(), "read json");
    Ok(catalog)
}
