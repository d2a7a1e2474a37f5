//! Swagger 2.0 type definitions
//!
//! Only the fields needed to validate the document and derive endpoints.
//! Top-level field names are lower-case because keys are folded before decoding.

pub use crate::decode::ScalarValue;
use serde::{Deserialize, Serialize};

/// Swagger document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swagger {
    /// Must be "2.0"
    #[serde(default)]
    pub swagger: Option<ScalarValue>,

    /// API metadata
    #[serde(default)]
    pub info: Option<Info>,

    /// Host, optionally with a port (e.g. "petstore.swagger.io:8080")
    #[serde(default)]
    pub host: Option<String>,

    /// Base path shared by every operation
    #[serde(default, rename = "basepath")]
    pub base_path: Option<String>,

    /// Transfer protocols
    #[serde(default)]
    pub schemes: Vec<String>,

    /// Paths are only checked for presence
    #[serde(default)]
    pub paths: Option<serde_json::Value>,
}

/// API information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub version: Option<ScalarValue>,

    #[serde(default)]
    pub description: Option<String>,
}
