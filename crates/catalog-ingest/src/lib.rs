//! Catalog ingestion: CSV and JSON readers plus the row normalizer.

pub mod csv_table;
pub mod error;
pub mod json;
pub mod loader;
pub mod normalize;

pub use csv_table::{CsvTable, is_blank_row, read_csv_table};
pub use error::{IngestError, Result};
pub use json::read_json_catalog;
pub use loader::{InputFormat, ensure_input_exists, load_normalized_catalog, load_raw_catalog};
pub use normalize::{coerce_numeric, normalize_catalog, normalize_record, normalize_rows};
