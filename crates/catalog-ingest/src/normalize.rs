//! Cleaning raw rows into catalog records.
//!
//! Rules, applied per row in source order:
//! - a row whose cells are all empty is dropped
//! - an empty or whitespace-only cell is omitted from the record
//! - other cells are trimmed
//! - `Pieces` and `Age min` become integers of any width when the trimmed
//!   text parses; otherwise the trimmed text is kept
//! - a row left with no fields is dropped

use catalog_model::fields::is_numeric_field;
use catalog_model::{Catalog, FieldValue, Record};
use tracing::{debug, trace};

use crate::csv_table::is_blank_row;

/// Integer of any width when the text parses, the text itself otherwise.
pub fn coerce_numeric(value: &str) -> FieldValue {
    FieldValue::parse_integer(value).unwrap_or_else(|| {
        trace!(value, "numeric field kept as text");
        FieldValue::Text(value.to_string())
    })
}

fn normalize_value(name: &str, value: &FieldValue) -> Option<FieldValue> {
    let FieldValue::Text(text) = value else {
        return Some(value.clone());
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_numeric_field(name) {
        Some(coerce_numeric(trimmed))
    } else {
        Some(FieldValue::Text(trimmed.to_string()))
    }
}

/// Normalize one raw row; `None` when nothing survives.
pub fn normalize_record(raw: &Record) -> Option<Record> {
    if is_blank_row(raw) {
        return None;
    }
    let record: Record = raw
        .iter()
        .filter_map(|(name, value)| normalize_value(name, value).map(|value| (name, value)))
        .collect();
    if record.is_empty() { None } else { Some(record) }
}

/// Normalize raw rows, keeping source order.
pub fn normalize_rows<'a>(rows: impl IntoIterator<Item = &'a Record>) -> Vec<Record> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        match normalize_record(row) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    debug!(records = records.len(), skipped, "normalized rows");
    records
}

pub fn normalize_catalog(catalog: &Catalog) -> Catalog {
    Catalog::new(normalize_rows(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> Record {
        cells.iter().copied().collect()
    }

    #[test]
    fn trims_and_coerces() {
        let raw = row(&[
            ("Set Number", " 001 "),
            ("Name", "X-Wing  "),
            ("Pieces", " 732"),
            ("Age min", "9"),
        ]);
        let record = normalize_record(&raw).unwrap();

        assert_eq!(record.text("Set Number").as_deref(), Some("001"));
        assert_eq!(record.text("Name").as_deref(), Some("X-Wing"));
        assert_eq!(record.get("Pieces"), Some(&FieldValue::Integer(732)));
        assert_eq!(record.get("Age min"), Some(&FieldValue::Integer(9)));
    }

    #[test]
    fn numeric_fallback_keeps_text() {
        let raw = row(&[("Pieces", "abc"), ("Age min", "9+")]);
        let record = normalize_record(&raw).unwrap();

        assert_eq!(record.get("Pieces"), Some(&FieldValue::Text("abc".into())));
        assert_eq!(record.get("Age min"), Some(&FieldValue::Text("9+".into())));
    }

    #[test]
    fn wide_piece_counts_stay_integers() {
        let raw = row(&[("Pieces", " 99999999999999999999 ")]);
        let record = normalize_record(&raw).unwrap();

        assert!(matches!(record.get("Pieces"), Some(FieldValue::Number(_))));
        assert_eq!(record.text("Pieces").as_deref(), Some("99999999999999999999"));
    }

    #[test]
    fn set_number_is_never_coerced() {
        let raw = row(&[("Set Number", "10179")]);
        let record = normalize_record(&raw).unwrap();
        assert_eq!(
            record.get("Set Number"),
            Some(&FieldValue::Text("10179".into()))
        );
    }

    #[test]
    fn blank_cells_are_omitted() {
        let raw = row(&[("Name", "X-Wing"), ("Notes", "   "), ("IP", "")]);
        let record = normalize_record(&raw).unwrap();

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["Name"]);
    }

    #[test]
    fn whitespace_only_row_is_dropped() {
        let raw = row(&[("Name", " "), ("Notes", "\t")]);
        assert_eq!(normalize_record(&raw), None);
    }

    #[test]
    fn integers_pass_through() {
        let mut raw = Record::new();
        raw.insert("Pieces", 732_i64);
        let record = normalize_record(&raw).unwrap();
        assert_eq!(record.get("Pieces"), Some(&FieldValue::Integer(732)));
    }
}
