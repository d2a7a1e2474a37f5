//! Swagger 2.0 document parser

use super::types::{Info, Swagger};
use crate::decode::{decode_mapping, fold_top_level_keys, scalar_to_string, Mapping};
use serde_json::Value;
use specscout_common::{
    EndpointDefinition, EndpointError, FormatTag, Result, SpecContentType,
};

/// Swagger / OpenAPI 2.0 parser
pub struct Oas2Parser {
    /// Decoded document
    spec: Swagger,

    /// Whether the bytes were JSON or YAML
    content_type: SpecContentType,
}

impl Oas2Parser {
    /// Decode and validate a Swagger 2.0 document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (mapping, content_type) = decode_mapping(bytes)
            .map_err(|e| EndpointError::detection(FormatTag::Oas2, e))?;
        Self::from_mapping(mapping, content_type)
    }

    /// Decode and validate an already-decoded mapping
    pub(crate) fn from_mapping(mapping: Mapping, content_type: SpecContentType) -> Result<Self> {
        let mut mapping = fold_top_level_keys(mapping);

        // `openapi: 2.x` documents are read as Swagger
        if !mapping.contains_key("swagger") {
            if let Some(version) = mapping.get("openapi").cloned() {
                if scalar_to_string(&version).is_some_and(|v| v.starts_with("2.")) {
                    mapping.insert("swagger".to_string(), version);
                }
            }
        }

        let spec: Swagger = serde_json::from_value(Value::Object(mapping)).map_err(|e| {
            EndpointError::detection(
                FormatTag::Oas2,
                format!("Failed to decode Swagger document: {}", e),
            )
        })?;

        validate(&spec)?;

        Ok(Self { spec, content_type })
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::Oas2
    }

    /// Derive one endpoint per declared scheme
    pub fn endpoints(&self) -> Result<Vec<EndpointDefinition>> {
        super::converter::convert_swagger_to_endpoints(&self.spec)
    }

    pub fn title(&self) -> &str {
        self.info().and_then(|info| info.title.as_deref()).unwrap_or_default()
    }

    pub fn version(&self) -> String {
        self.info()
            .and_then(|info| info.version.as_ref())
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.info()
            .and_then(|info| info.description.as_deref())
            .unwrap_or_default()
    }

    pub fn content_type(&self) -> SpecContentType {
        self.content_type
    }

    /// Get reference to the underlying Swagger document
    pub fn spec(&self) -> &Swagger {
        &self.spec
    }

    fn info(&self) -> Option<&Info> {
        self.spec.info.as_ref()
    }
}

fn validate(spec: &Swagger) -> Result<()> {
    let version = spec.swagger.as_ref().map(ToString::to_string);
    if version.as_deref() != Some("2.0") {
        return Err(oas2_error("'swagger' must be version '2.0'."));
    }
    let has_title = spec
        .info
        .as_ref()
        .and_then(|info| info.title.as_deref())
        .is_some_and(|title| !title.is_empty());
    if !has_title {
        return Err(oas2_error("'info.title' key not found."));
    }
    if spec.paths.is_none() {
        return Err(oas2_error("'paths' key not found."));
    }
    Ok(())
}

fn oas2_error(msg: &str) -> EndpointError {
    EndpointError::validation(
        FormatTag::Oas2,
        format!("invalid openapi 2.0 specification: {}", msg),
    )
}
