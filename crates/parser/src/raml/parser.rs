//! RAML document parser

use crate::decode::{decode_yaml, scalar_to_string, Mapping};
use serde_json::Value;
use specscout_common::{
    EndpointDefinition, EndpointError, FormatTag, PortResolver, Result, SpecContentType,
};

/// Header versions accepted on the first line (`#%RAML 1.0`)
const RAML_HEADERS: &[&str] = &["#%RAML 0.8", "#%RAML 1.0"];

/// RAML parser
pub struct RamlParser {
    document: Mapping,
}

impl RamlParser {
    /// Decode a RAML document; the `#%RAML` header line is required
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !has_raml_header(bytes) {
            return Err(EndpointError::detection(
                FormatTag::Raml,
                "invalid RAML specification: missing '#%RAML 0.8' or '#%RAML 1.0' header",
            ));
        }

        let value = decode_yaml(bytes).map_err(|e| {
            EndpointError::detection(FormatTag::Raml, format!("Failed to parse RAML YAML: {}", e))
        })?;

        match value {
            Value::Object(document) => Ok(Self { document }),
            _ => Err(EndpointError::detection(
                FormatTag::Raml,
                "RAML document root is not a mapping",
            )),
        }
    }

    pub(crate) fn from_mapping(document: Mapping) -> Self {
        Self { document }
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::Raml
    }

    pub fn endpoints(&self, ports: &dyn PortResolver) -> Result<Vec<EndpointDefinition>> {
        super::converter::convert_raml_to_endpoints(&self.document, ports)
    }

    pub fn title(&self) -> String {
        self.scalar("title")
    }

    pub fn version(&self) -> String {
        self.scalar("version")
    }

    pub fn description(&self) -> String {
        self.scalar("description")
    }

    pub fn content_type(&self) -> SpecContentType {
        SpecContentType::Yaml
    }

    /// Get reference to the raw document
    pub fn document(&self) -> &Mapping {
        &self.document
    }

    fn scalar(&self, key: &str) -> String {
        self.document
            .get(key)
            .and_then(scalar_to_string)
            .unwrap_or_default()
    }
}

/// Whether the document starts with a supported `#%RAML` header
pub(crate) fn has_raml_header(bytes: &[u8]) -> bool {
    RAML_HEADERS
        .iter()
        .any(|header| bytes.starts_with(header.as_bytes()))
}
