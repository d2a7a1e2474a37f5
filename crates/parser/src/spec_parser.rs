//! Entry point tying detection, extraction, and port lookup together

use crate::document::SpecDocument;
use crate::extractor::Extractor;
use serde::Serialize;
use specscout_common::{
    EndpointDefinition, FormatTag, PortResolver, Result, ServicePortTable, SpecContentType,
};

/// Outcome of a successful parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSpec {
    /// Format the document was read as
    pub format: FormatTag,

    /// Endpoints in extractor order (unspecified for AsyncAPI)
    pub endpoints: Vec<EndpointDefinition>,

    pub title: String,
    pub version: String,
    pub description: String,

    /// Serialization of the document, when it had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<SpecContentType>,
}

/// Spec parser with an injected protocol-to-port lookup
///
/// # Example
///
/// ```
/// use specscout_parser::SpecParser;
/// use specscout_common::FormatTag;
///
/// let spec = br#"{"swagger": "2.0", "info": {"title": "Pets"}, "host": "pets.io", "paths": {}}"#;
/// let parsed = SpecParser::new().parse(spec, None).unwrap();
/// assert_eq!(parsed.format, FormatTag::Oas2);
/// assert_eq!(parsed.endpoints[0].host, "pets.io");
/// ```
pub struct SpecParser {
    ports: Box<dyn PortResolver + Send + Sync>,
}

impl SpecParser {
    /// Parser backed by the well-known service port table
    pub fn new() -> Self {
        Self::with_ports(ServicePortTable::well_known())
    }

    /// Parser backed by a custom port lookup
    pub fn with_ports(ports: impl PortResolver + Send + Sync + 'static) -> Self {
        Self {
            ports: Box::new(ports),
        }
    }

    pub fn ports(&self) -> &dyn PortResolver {
        self.ports.as_ref()
    }

    /// Select the extractor for `bytes` without deriving endpoints
    pub fn extractor(&self, bytes: &[u8], hint: Option<FormatTag>) -> Result<Extractor> {
        SpecDocument::new(bytes, hint).into_extractor()
    }

    /// Detect (or honor the hinted) format and extract its endpoints
    ///
    /// Either the full endpoint list is returned or an error; never a
    /// partial list.
    pub fn parse(&self, bytes: &[u8], hint: Option<FormatTag>) -> Result<ParsedSpec> {
        let extractor = self.extractor(bytes, hint)?;
        let format = extractor.resource_type();

        let endpoints = extractor.endpoints(self.ports()).map_err(|e| {
            tracing::error!(format = %format, error = %e, "Endpoint extraction failed");
            e
        })?;

        tracing::debug!(
            format = %format,
            endpoints = endpoints.len(),
            "Parsed spec document"
        );

        Ok(ParsedSpec {
            format,
            endpoints,
            title: extractor.title(),
            version: extractor.version(),
            description: extractor.description(),
            content_type: extractor.content_type(),
        })
    }

    /// Like [`SpecParser::parse`], with the hint given as a raw token
    ///
    /// An empty token auto-detects. An unrecognized token selects the
    /// unstructured fallback.
    pub fn parse_with_hint_token(&self, bytes: &[u8], token: &str) -> Result<ParsedSpec> {
        let hint = if token.trim().is_empty() {
            None
        } else {
            match token.parse::<FormatTag>() {
                Ok(format) => Some(format),
                Err(e) => {
                    tracing::warn!(token = %token, error = %e, "Unknown spec format hint");
                    Some(FormatTag::Unstructured)
                }
            }
        };
        self.parse(bytes, hint)
    }
}

impl Default for SpecParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_metadata() {
        let spec = "openapi: 3.0.1\ninfo:\n  title: Petstore\n  version: 1.0.0\n  description: Pets\npaths: {}\nservers:\n  - url: https://api.pets.io/v1\n";
        let parsed = SpecParser::new().parse(spec.as_bytes(), None).unwrap();

        assert_eq!(parsed.format, FormatTag::Oas3);
        assert_eq!(parsed.title, "Petstore");
        assert_eq!(parsed.version, "1.0.0");
        assert_eq!(parsed.description, "Pets");
        assert_eq!(parsed.content_type, Some(SpecContentType::Yaml));
        assert_eq!(parsed.endpoints.len(), 1);
        assert_eq!(parsed.endpoints[0].port, 443);
    }

    #[test]
    fn test_hint_token_empty_detects() {
        let spec = br#"{"swagger": "2.0", "info": {"title": "t"}, "host": "h", "paths": {}}"#;
        let parsed = SpecParser::new().parse_with_hint_token(spec, "  ").unwrap();
        assert_eq!(parsed.format, FormatTag::Oas2);
    }

    #[test]
    fn test_hint_token_is_case_insensitive() {
        let spec = br#"{"swagger": "2.0", "info": {"title": "t"}, "host": "h", "paths": {}}"#;
        let parsed = SpecParser::new().parse_with_hint_token(spec, "OAS2").unwrap();
        assert_eq!(parsed.format, FormatTag::Oas2);
    }

    #[test]
    fn test_unknown_hint_token_is_unstructured() {
        let spec = br#"{"swagger": "2.0", "info": {"title": "t"}, "host": "h", "paths": {}}"#;
        let parsed = SpecParser::new()
            .parse_with_hint_token(spec, "graphql")
            .unwrap();
        assert_eq!(parsed.format, FormatTag::Unstructured);
        assert!(parsed.endpoints.is_empty());
    }

    #[test]
    fn test_custom_ports_are_used() {
        let table = ServicePortTable::empty().with_entry("https", 8443);
        let spec = "openapi: 3.0.0\ninfo:\n  title: t\npaths: {}\nservers:\n  - url: https://internal.example.com\n";
        let parsed = SpecParser::with_ports(table)
            .parse(spec.as_bytes(), None)
            .unwrap();
        assert_eq!(parsed.endpoints[0].port, 8443);
    }
}
