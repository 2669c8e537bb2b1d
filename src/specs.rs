//! Product specification display transform.
//!
//! A product's `details` map holds loosely structured values such as
//! `"Color:White; Clarity:VS1"`. Each entry becomes a section of rows: a
//! labelled pair when a segment has a colon, plain text otherwise.

use serde_json::{Map, Value};

/// Shown when a labelled segment has nothing after its colon.
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecRow {
    Pair { label: String, value: String },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSection {
    pub key: String,
    pub rows: Vec<SpecRow>,
}

/// Build display sections for every truthy entry, in map order.
#[must_use]
pub fn spec_sections(details: &Map<String, Value>) -> Vec<SpecSection> {
    details
        .iter()
        .filter(|(_, value)| !is_falsy(value))
        .map(|(key, value)| SpecSection {
            key: key.clone(),
            rows: segments(value).iter().filter_map(|s| parse_segment(s)).collect(),
        })
        .collect()
}

/// `null`, `false`, `0`, and `""` carry nothing worth showing.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Split a semicolon list into trimmed non-empty segments; anything else is one segment.
fn segments(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if s.contains(';') => s
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect(),
        other => vec![display_text(other).trim().to_owned()],
    }
}

fn parse_segment(segment: &str) -> Option<SpecRow> {
    if segment.is_empty() {
        return None;
    }
    let row = match segment.split_once(':') {
        Some((label, value)) => {
            let value = value.trim();
            SpecRow::Pair {
                label: label.trim().to_owned(),
                value: if value.is_empty() { MISSING_VALUE.to_owned() } else { value.to_owned() },
            }
        }
        None => SpecRow::Text(segment.to_owned()),
    };
    Some(row)
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "specs_test.rs"]
mod tests;
