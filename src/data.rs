//! Embedding the resume document into the template as JSON
//!
//! The YAML document is converted value-for-value into JSON so the template's
//! script can consume it directly: mapping key order is preserved, non-ASCII
//! text is left unescaped, and the output is pretty-printed with two-space
//! indentation.

use serde_json::Value as Json;
use serde_yaml::Value as Yaml;

/// Token replaced with the serialized resume document.
pub const DATA_PLACEHOLDER: &str = "{{ CV_DATA }}";

/// Marker line deleted verbatim from the template, trailing newline included.
pub const MARKER_COMMENT: &str =
    "        // CV Data Placeholder - Will be replaced by build script\n";

/// Substitute the serialized resume document into the template and drop the
/// marker comment line.
pub fn embed_data(template: &str, cv: &Yaml) -> String {
    let json = serde_json::to_string_pretty(&to_json(cv))
        .expect("a JSON value always serializes");
    template
        .replace(MARKER_COMMENT, "")
        .replace(DATA_PLACEHOLDER, &json)
}

/// Convert a YAML value to JSON, preserving mapping key order.
///
/// Non-string mapping keys are stringified; non-finite floats become null.
pub fn to_json(value: &Yaml) -> Json {
    match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(*b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Json::Number)
                    .unwrap_or(Json::Null)
            }
        }
        Yaml::String(s) => Json::String(s.clone()),
        Yaml::Sequence(items) => Json::Array(items.iter().map(to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_text(key), to_json(value));
            }
            Json::Object(object)
        }
        Yaml::Tagged(tagged) => to_json(&tagged.value),
    }
}

fn key_text(key: &Yaml) -> String {
    match key {
        Yaml::String(s) => s.clone(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
