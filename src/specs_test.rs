use super::*;
use serde_json::json;

fn details(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn pair(label: &str, value: &str) -> SpecRow {
    SpecRow::Pair { label: label.into(), value: value.into() }
}

#[test]
fn semicolon_list_yields_labelled_rows() {
    let sections = spec_sections(&details(json!({ "Diamond": "Color:White; Clarity:VS1" })));
    assert_eq!(
        sections,
        vec![SpecSection { key: "Diamond".into(), rows: vec![pair("Color", "White"), pair("Clarity", "VS1")] }]
    );
}

#[test]
fn falsy_values_are_skipped() {
    let sections = spec_sections(&details(json!({
        "Empty": "",
        "Null": null,
        "No": false,
        "Zero": 0,
        "Metal": "Gold"
    })));
    let keys: Vec<&str> = sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["Metal"]);
}

#[test]
fn plain_value_is_single_text_row() {
    let sections = spec_sections(&details(json!({ "Metal": "  18k White Gold " })));
    assert_eq!(sections[0].rows, vec![SpecRow::Text("18k White Gold".into())]);
}

#[test]
fn single_segment_with_colon_is_a_pair() {
    let sections = spec_sections(&details(json!({ "Setting": "Style: Prong" })));
    assert_eq!(sections[0].rows, vec![pair("Style", "Prong")]);
}

#[test]
fn splits_on_first_colon_only() {
    let sections = spec_sections(&details(json!({ "Care": "Note: clean at 10:30; Box:Included" })));
    assert_eq!(sections[0].rows, vec![pair("Note", "clean at 10:30"), pair("Box", "Included")]);
}

#[test]
fn empty_segments_are_dropped_and_blank_values_read_na() {
    let sections = spec_sections(&details(json!({ "Stone": "Cut:; ;Shape:Round;;" })));
    assert_eq!(sections[0].rows, vec![pair("Cut", MISSING_VALUE), pair("Shape", "Round")]);
}

#[test]
fn non_string_values_display_as_text() {
    let sections = spec_sections(&details(json!({
        "Carat": 1.5,
        "Certified": true,
        "Sizes": [5, 6, 7]
    })));
    assert_eq!(sections[0].rows, vec![SpecRow::Text("1.5".into())]);
    assert_eq!(sections[1].rows, vec![SpecRow::Text("true".into())]);
    assert_eq!(sections[2].rows, vec![SpecRow::Text("5,6,7".into())]);
}

#[test]
fn sections_keep_backend_key_order() {
    let sections = spec_sections(&details(json!({ "Zeta": "z", "Alpha": "a", "Mu": "m" })));
    let keys: Vec<&str> = sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["Zeta", "Alpha", "Mu"]);
}

#[test]
fn only_separators_keeps_section_without_rows() {
    let sections = spec_sections(&details(json!({ "Extras": ";;" })));
    assert_eq!(sections, vec![SpecSection { key: "Extras".into(), rows: Vec::new() }]);
}
