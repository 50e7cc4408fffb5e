use catalog_model::{Catalog, FieldValue, Record, SetState};

#[test]
fn json_values_keep_their_types() {
    let json = r#"[{"Name":"Bucket","Pieces":18446744073709551615,"Weight":1.5,"Boxed":true}]"#;
    let catalog: Catalog = serde_json::from_str(json).expect("parse catalog");
    let record = &catalog.records()[0];

    assert!(matches!(record.get("Weight"), Some(FieldValue::Number(_))));
    assert_eq!(record.text("Weight").as_deref(), Some("1.5"));
    assert_eq!(record.get("Boxed"), Some(&FieldValue::Boolean(true)));
    assert!(matches!(record.get("Pieces"), Some(FieldValue::Number(_))));
    assert_eq!(record.text("Boxed").as_deref(), Some("true"));
}

#[test]
fn wide_integers_round_trip_exactly() {
    let json = r#"[{"Pieces":18446744073709551615,"Big":123456789012345678901234,"Age min":-9223372036854775809}]"#;
    let catalog: Catalog = serde_json::from_str(json).expect("parse catalog");
    let record = &catalog.records()[0];

    assert_eq!(record.text("Pieces").as_deref(), Some("18446744073709551615"));
    assert_eq!(record.text("Big").as_deref(), Some("123456789012345678901234"));

    let out = serde_json::to_string(&catalog).expect("serialize catalog");
    assert_eq!(out, json);
}

#[test]
fn non_object_entries_are_rejected() {
    let result = serde_json::from_str::<Catalog>(r#"["X-Wing"]"#);
    assert!(result.is_err());

    let nested = serde_json::from_str::<Catalog>(r#"[{"Name":{"first":"X"}}]"#);
    assert!(nested.is_err());
}

#[test]
fn record_state_needs_exact_text() {
    let ready: Record = [("State", "Ready to go")].into_iter().collect();
    let padded: Record = [("State", "Ready to go ")].into_iter().collect();

    assert_eq!(Catalog::record_state(&ready), Some(SetState::ReadyToGo));
    assert_eq!(Catalog::record_state(&padded), None);
}
