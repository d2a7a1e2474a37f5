//! OpenAPI 3.x document parser

use super::types::{Info, OpenApiSpec};
use crate::decode::{decode_mapping, Mapping};
use serde_json::Value;
use specscout_common::{
    EndpointDefinition, EndpointError, FormatTag, PortResolver, Result, SpecContentType,
};

/// OpenAPI 3.x parser
///
/// Construction decodes and validates the document; endpoint extraction is
/// deferred to [`Oas3Parser::endpoints`].
pub struct Oas3Parser {
    /// Loaded OpenAPI spec
    spec: OpenApiSpec,

    /// Whether the bytes were JSON or YAML
    content_type: SpecContentType,
}

impl Oas3Parser {
    /// Decode and validate an OpenAPI 3.x document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (mapping, content_type) = decode_mapping(bytes)
            .map_err(|e| EndpointError::detection(FormatTag::Oas3, e))?;
        Self::from_mapping(mapping, content_type)
    }

    pub(crate) fn from_mapping(mapping: Mapping, content_type: SpecContentType) -> Result<Self> {
        let spec: OpenApiSpec = serde_json::from_value(Value::Object(mapping)).map_err(|e| {
            EndpointError::detection(
                FormatTag::Oas3,
                format!("Failed to decode OpenAPI document: {}", e),
            )
        })?;

        validate(&spec)?;

        Ok(Self { spec, content_type })
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::Oas3
    }

    /// Derive endpoints for every server, in declaration order
    pub fn endpoints(&self, ports: &dyn PortResolver) -> Result<Vec<EndpointDefinition>> {
        super::converter::convert_servers_to_endpoints(&self.spec, ports)
    }

    pub fn title(&self) -> &str {
        self.info()
            .and_then(|info| info.title.as_deref())
            .unwrap_or_default()
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

    /// Get reference to the underlying OpenAPI spec
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }

    fn info(&self) -> Option<&Info> {
        self.spec.info.as_ref()
    }
}

fn validate(spec: &OpenApiSpec) -> Result<()> {
    let version = spec
        .openapi
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    if !version.starts_with("3.") {
        return Err(oas3_error("'openapi' key is invalid."));
    }

    let Some(info) = spec.info.as_ref() else {
        return Err(oas3_error("'info' key not found."));
    };
    if info.title.as_deref().map_or(true, str::is_empty) {
        return Err(oas3_error("'info.title' key not found."));
    }

    if spec.paths.is_none() {
        return Err(oas3_error("'paths' key not found."));
    }
    Ok(())
}

fn oas3_error(msg: &str) -> EndpointError {
    EndpointError::validation(
        FormatTag::Oas3,
        format!("invalid openapi 3 specification: {}", msg),
    )
}
