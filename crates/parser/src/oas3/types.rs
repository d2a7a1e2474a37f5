//! OpenAPI 3.x type definitions
//!
//! Simplified representation focusing on server extraction

pub use crate::decode::ScalarValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., "3.0.1")
    #[serde(default)]
    pub openapi: Option<ScalarValue>,

    /// API metadata
    #[serde(default)]
    pub info: Option<Info>,

    /// API paths, only checked for presence
    #[serde(default)]
    pub paths: Option<serde_json::Value>,

    /// Servers
    #[serde(default)]
    pub servers: Vec<Server>,
}

/// API information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    /// API title
    #[serde(default)]
    pub title: Option<String>,

    /// API version
    #[serde(default)]
    pub version: Option<ScalarValue>,

    /// API description
    #[serde(default)]
    pub description: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server URL template (may contain `{name}` placeholders)
    #[serde(default)]
    pub url: String,

    /// Server description
    #[serde(default)]
    pub description: Option<String>,

    /// Template variables
    #[serde(default)]
    pub variables: BTreeMap<String, ServerVariable>,
}

/// Server URL template variable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerVariable {
    /// Value used for the default URL
    #[serde(default)]
    pub default: Option<ScalarValue>,

    /// Allowed values; each one produces its own URL
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<ScalarValue>,

    #[serde(default)]
    pub description: Option<String>,
}

impl ServerVariable {
    /// Default value, treating an empty string as absent
    pub fn default_value(&self) -> Option<String> {
        self.default
            .as_ref()
            .map(ToString::to_string)
            .filter(|v| !v.is_empty())
    }
}

impl Server {
    /// Names of the `{name}` placeholders in the URL, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.url.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }
}
