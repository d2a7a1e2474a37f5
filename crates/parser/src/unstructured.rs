//! Terminal fallback for documents no other parser recognizes

use specscout_common::{EndpointDefinition, FormatTag};

/// Unstructured document; always accepted, never has endpoints
#[derive(Debug, Clone, Default)]
pub struct UnstructuredParser;

impl UnstructuredParser {
    pub fn from_bytes(_bytes: &[u8]) -> Self {
        Self
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::Unstructured
    }

    pub fn endpoints(&self) -> Vec<EndpointDefinition> {
        Vec::new()
    }
}
