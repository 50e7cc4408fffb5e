//! JSON output: the catalog as a pretty-printed array.

use catalog_model::Catalog;

use crate::error::{ReportError, Result};
use crate::latex::RenderedDocument;

/// Two-space indentation, field order as inserted, non-ASCII kept literal.
/// No trailing newline.
pub fn render_json(catalog: &Catalog) -> Result<RenderedDocument> {
    let text =
        serde_json::to_string_pretty(catalog).map_err(|source| ReportError::Serialize { source })?;
    Ok(RenderedDocument {
        text,
        entries: catalog.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::Record;

    #[test]
    fn keeps_non_ascii_and_types() {
        let mut record = Record::new();
        record.insert("Name", "Café Corner");
        record.insert("Pieces", 2056_i64);
        let document = render_json(&Catalog::new(vec![record])).unwrap();

        assert_eq!(
            document.text,
            "[\n  {\n    \"Name\": \"Café Corner\",\n    \"Pieces\": 2056\n  }\n]"
        );
        assert_eq!(document.entries, 1);
    }

    #[test]
    fn empty_catalog() {
        let document = render_json(&Catalog::default()).unwrap();
        assert_eq!(document.text, "[]");
    }
}
