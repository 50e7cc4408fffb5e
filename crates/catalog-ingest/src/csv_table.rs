//! CSV reading with the first row as header.

use std::io::BufReader;
use std::path::Path;

use catalog_model::{Catalog, Record};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};
use crate::loader::open_input;

/// Header names and raw rows of a CSV file.
///
/// Rows hold every cell as untrimmed text. A row shorter than the header
/// simply lacks the trailing fields.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl CsvTable {
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.rows)
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

fn raw_row(headers: &[String], record: &StringRecord) -> Record {
    if record.len() > headers.len() {
        trace!(
            extra = record.len() - headers.len(),
            "ignoring cells beyond the header"
        );
    }
    headers
        .iter()
        .zip(record.iter())
        .map(|(name, value)| (name.as_str(), value))
        .collect()
}

/// True when every cell of the row is the empty string.
pub fn is_blank_row(row: &Record) -> bool {
    row.iter().all(|(_, value)| value.is_empty())
}

/// Reads a CSV file into raw rows, dropping rows whose cells are all empty.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = open_input(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row = raw_row(&headers, &record);
        if is_blank_row(&row) {
            debug!(
                line = record.position().map_or(0, csv::Position::line),
                "skipping empty row"
            );
            continue;
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv"
    );
    Ok(CsvTable { headers, rows })
}
