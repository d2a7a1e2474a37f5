//! Common types and utilities for specscout
//!
//! This crate contains the endpoint model, the format tags, the error type and
//! the protocol-to-port lookup shared by the parser and the CLI.

mod ports;

pub use ports::{PortResolver, ServicePortTable, ServicePortsFile};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while detecting a format or extracting endpoints
#[derive(Error, Debug)]
pub enum EndpointError {
    /// An explicitly requested format could not decode the document
    #[error("{format} format detection failed: {message}")]
    FormatDetection { format: FormatTag, message: String },

    /// The document decoded but lacks a field its format requires
    #[error("invalid {format} specification: {message}")]
    Validation { format: FormatTag, message: String },

    /// A URL, template variable or port could not be resolved
    #[error("could not resolve {format} endpoints: {message}")]
    EndpointResolution { format: FormatTag, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EndpointError {
    pub fn detection(format: FormatTag, message: impl Into<String>) -> Self {
        Self::FormatDetection {
            format,
            message: message.into(),
        }
    }

    pub fn validation(format: FormatTag, message: impl Into<String>) -> Self {
        Self::Validation {
            format,
            message: message.into(),
        }
    }

    pub fn resolution(format: FormatTag, message: impl Into<String>) -> Self {
        Self::EndpointResolution {
            format,
            message: message.into(),
        }
    }

    /// Format the error was raised for, if it came from an extractor
    pub fn format(&self) -> Option<FormatTag> {
        match self {
            Self::FormatDetection { format, .. }
            | Self::Validation { format, .. }
            | Self::EndpointResolution { format, .. } => Some(*format),
            Self::Config(_) | Self::Io(_) => None,
        }
    }
}

/// Result type for specscout operations
pub type Result<T> = std::result::Result<T, EndpointError>;

/// The closed set of recognized specification formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Oas2,
    Oas3,
    Wsdl,
    #[serde(rename = "asyncapi")]
    AsyncApi,
    Protobuf,
    Raml,
    Unstructured,
}

impl FormatTag {
    pub const ALL: [FormatTag; 7] = [
        FormatTag::Oas2,
        FormatTag::Oas3,
        FormatTag::Wsdl,
        FormatTag::AsyncApi,
        FormatTag::Protobuf,
        FormatTag::Raml,
        FormatTag::Unstructured,
    ];

    /// The hint token for this format (e.g. "oas3")
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Oas2 => "oas2",
            FormatTag::Oas3 => "oas3",
            FormatTag::Wsdl => "wsdl",
            FormatTag::AsyncApi => "asyncapi",
            FormatTag::Protobuf => "protobuf",
            FormatTag::Raml => "raml",
            FormatTag::Unstructured => "unstructured",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatTag {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        FormatTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == token)
            .ok_or_else(|| EndpointError::Config(format!("unknown format token: {}", s)))
    }
}

/// Encoding the document bytes were decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecContentType {
    Json,
    Yaml,
    Xml,
}

impl SpecContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            SpecContentType::Json => "application/json",
            SpecContentType::Yaml => "application/yaml",
            SpecContentType::Xml => "application/xml",
        }
    }
}

/// A network endpoint derived from a specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDefinition {
    /// Host name, never empty on a successful extraction
    pub host: String,

    /// TCP port, 0 when unresolved
    pub port: u16,

    /// Scheme token (e.g. "https", "kafka", "mqtt")
    pub protocol: String,

    /// Base path, may be empty
    pub base_path: String,

    /// Format-specific routing details (e.g. AsyncAPI server bindings)
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl EndpointDefinition {
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            protocol: protocol.into(),
            base_path: base_path.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_details(mut self, details: BTreeMap<String, serde_json::Value>) -> Self {
        self.details = details;
        self
    }

    /// Identity used for deduplication: (host, port, protocol, base path)
    pub fn routing_key(&self) -> (&str, u16, &str, &str) {
        (&self.host, self.port, &self.protocol, &self.base_path)
    }

    pub fn same_route(&self, other: &EndpointDefinition) -> bool {
        self.routing_key() == other.routing_key()
    }
}

impl fmt::Display for EndpointDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.base_path
        )
    }
}

/// Remove endpoints whose routing key was already seen, keeping first-seen order
pub fn dedup_endpoints(endpoints: Vec<EndpointDefinition>) -> Vec<EndpointDefinition> {
    let mut seen: HashSet<(String, u16, String, String)> = HashSet::new();
    endpoints
        .into_iter()
        .filter(|ep| {
            seen.insert((
                ep.host.clone(),
                ep.port,
                ep.protocol.clone(),
                ep.base_path.clone(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tag_tokens() {
        for tag in FormatTag::ALL {
            assert_eq!(tag.as_str().parse::<FormatTag>().unwrap(), tag);
        }
        assert_eq!("OAS3".parse::<FormatTag>().unwrap(), FormatTag::Oas3);
        assert!("graphql".parse::<FormatTag>().is_err());
    }

    #[test]
    fn test_dedup_keeps_first_seen() {
        let mut first = EndpointDefinition::new("https", "a.com", 443, "/");
        first
            .details
            .insert("origin".to_string(), serde_json::json!("first"));
        let endpoints = vec![
            first,
            EndpointDefinition::new("http", "a.com", 80, "/"),
            EndpointDefinition::new("https", "a.com", 443, "/"),
        ];

        let deduped = dedup_endpoints(endpoints);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].details["origin"], "first");
        assert_eq!(deduped[1].protocol, "http");
    }

    #[test]
    fn test_same_route_ignores_details() {
        let a = EndpointDefinition::new("kafka", "broker", 9092, "");
        let mut details = BTreeMap::new();
        details.insert("kafka".to_string(), serde_json::json!({"clientId": "x"}));
        let b = a.clone().with_details(details);
        assert!(a.same_route(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_error_reports_format() {
        let err = EndpointError::validation(FormatTag::Oas2, "'info.title' key not found.");
        assert_eq!(err.format(), Some(FormatTag::Oas2));
        assert_eq!(
            err.to_string(),
            "invalid oas2 specification: 'info.title' key not found."
        );
        assert!(EndpointError::Config("x".into()).format().is_none());
    }
}
