//! AsyncAPI document parser

use crate::decode::{decode_mapping, info_field, Mapping};
use specscout_common::{EndpointDefinition, EndpointError, FormatTag, Result, SpecContentType};

const ASYNCAPI_KEY: &str = "asyncapi";

/// AsyncAPI parser over a generic decoded mapping
pub struct AsyncApiParser {
    document: Mapping,
    content_type: SpecContentType,
}

impl AsyncApiParser {
    /// Decode a YAML/JSON document that carries an `asyncapi` key
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (document, content_type) = decode_mapping(bytes)
            .map_err(|e| EndpointError::detection(FormatTag::AsyncApi, e))?;

        if !document.contains_key(ASYNCAPI_KEY) {
            return Err(EndpointError::detection(
                FormatTag::AsyncApi,
                "invalid asyncapi specification: 'asyncapi' key not found",
            ));
        }

        Ok(Self::from_mapping(document, content_type))
    }

    /// Wrap a mapping already known to contain the `asyncapi` key
    pub(crate) fn from_mapping(document: Mapping, content_type: SpecContentType) -> Self {
        Self {
            document,
            content_type,
        }
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::AsyncApi
    }

    /// Derive one endpoint per server; order is unspecified
    pub fn endpoints(&self) -> Result<Vec<EndpointDefinition>> {
        super::converter::convert_servers_to_endpoints(&self.document)
    }

    pub fn title(&self) -> String {
        info_field(&self.document, "title")
    }

    pub fn version(&self) -> String {
        info_field(&self.document, "version")
    }

    pub fn description(&self) -> String {
        info_field(&self.document, "description")
    }

    pub fn content_type(&self) -> SpecContentType {
        self.content_type
    }

    /// Get reference to the raw document
    pub fn document(&self) -> &Mapping {
        &self.document
    }
}
