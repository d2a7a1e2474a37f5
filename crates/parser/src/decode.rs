//! Generic YAML/JSON decoding shared by the mapping-based formats

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use specscout_common::SpecContentType;
use std::fmt;

/// A decoded top-level key/value document
pub type Mapping = Map<String, Value>;

/// A YAML scalar read as text
///
/// YAML authors routinely leave ports and versions unquoted
/// (`default: 8443`), so numbers and booleans are accepted wherever the
/// document model expects a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(x) => write!(f, "{:?}", x),
            ScalarValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Decode bytes as JSON, falling back to YAML, and require a mapping root
///
/// JSON is tried first so the reported content type is exact; YAML would
/// accept the same input.
pub(crate) fn decode_mapping(bytes: &[u8]) -> Result<(Mapping, SpecContentType), String> {
    let (value, content_type) = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => (value, SpecContentType::Json),
        Err(_) => {
            let value =
                decode_yaml(bytes).map_err(|e| format!("not valid JSON or YAML: {}", e))?;
            (value, SpecContentType::Yaml)
        }
    };

    match value {
        Value::Object(mapping) => Ok((mapping, content_type)),
        _ => Err("document root is not a mapping".to_string()),
    }
}

/// Decode YAML into the JSON document model
///
/// Local tags such as RAML's `!include` are dropped and the tagged value is
/// kept as is, so `types: !include types.raml` reads as a plain string.
pub(crate) fn decode_yaml(bytes: &[u8]) -> Result<Value, String> {
    let value: serde_yaml::Value = serde_yaml::from_slice(bytes).map_err(|e| e.to_string())?;
    serde_json::to_value(strip_tags(value)).map_err(|e| e.to_string())
}

fn strip_tags(value: serde_yaml::Value) -> serde_yaml::Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Tagged(tagged) => strip_tags(tagged.value),
        Yaml::Sequence(items) => Yaml::Sequence(items.into_iter().map(strip_tags).collect()),
        Yaml::Mapping(entries) => Yaml::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (strip_tags(key), strip_tags(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Lower-case every top-level key; nested keys are left alone
pub(crate) fn fold_top_level_keys(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}

/// Render a YAML/JSON scalar the way it was written
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn str_field<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a str> {
    mapping.get(key).and_then(Value::as_str)
}

/// Read `info.<key>` as a string, empty when absent
pub(crate) fn info_field(mapping: &Mapping, key: &str) -> String {
    mapping
        .get("info")
        .and_then(Value::as_object)
        .and_then(|info| info.get(key))
        .and_then(scalar_to_string)
        .unwrap_or_default()
}
