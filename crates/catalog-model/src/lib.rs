//! Data model for the LEGO catalog converter.
//!
//! - [`Record`]: one catalog entry, an ordered map of field name to [`FieldValue`]
//! - [`Catalog`]: the ordered records of one run
//! - [`SetState`] / [`StateSummary`]: the build states the reports count and shade

pub mod catalog;
pub mod fields;
pub mod record;

pub use catalog::{Catalog, SetState, StateSummary};
pub use record::{FieldValue, Record};

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(state: &str) -> Record {
        [("Name", "Set"), ("State", state)].into_iter().collect()
    }

    #[test]
    fn state_summary_counts_exact_matches() {
        let catalog: Catalog = [
            "Ready to go",
            "Ready to go",
            "Partially complete",
            "In the aether",
            "Unknown",
        ]
        .into_iter()
        .map(with_state)
        .collect();

        let summary = catalog.state_summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.ready, 2);
        assert_eq!(summary.partial, 1);
        assert_eq!(summary.aether, 1);
        assert_eq!(summary.other(), 1);
    }

    #[test]
    fn state_summary_is_case_and_space_sensitive() {
        let catalog: Catalog = ["ready to go", " Ready to go", ""]
            .into_iter()
            .map(with_state)
            .collect();

        let summary = catalog.state_summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.ready, 0);
    }

    #[test]
    fn state_counts_groups_missing_state() {
        let mut without_state = Record::new();
        without_state.insert("Name", "Loose bricks");
        let catalog = Catalog::new(vec![
            with_state("Ready to go"),
            without_state,
            with_state("Ready to go"),
        ]);

        let counts = catalog.state_counts();
        assert_eq!(counts.get(&Some("Ready to go".to_string())), Some(&2));
        assert_eq!(counts.get(&None), Some(&1));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let json = r#"[{"Set Number":"001","Name":"X-Wing","Pieces":732,"Notes":null}]"#;
        let catalog: Catalog = serde_json::from_str(json).expect("parse catalog");

        assert_eq!(catalog.len(), 1);
        let record = &catalog.records()[0];
        assert_eq!(record.get("Pieces"), Some(&FieldValue::Integer(732)));
        assert!(!record.contains("Notes"));

        let out = serde_json::to_string(&catalog).expect("serialize catalog");
        assert_eq!(out, r#"[{"Set Number":"001","Name":"X-Wing","Pieces":732}]"#);
    }
}
