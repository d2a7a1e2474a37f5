//! Format detection and endpoint extraction for API specifications
//!
//! This crate reads a raw API description of unknown or declared format and
//! turns it into a list of network endpoints ([`EndpointDefinition`]).
//!
//! ## Detection Strategy
//!
//! Without a format hint, the document is classified in a fixed order:
//! 1. Decode as JSON or YAML and inspect the top-level keys:
//!    - `openapi: 3.x` → OpenAPI 3, `openapi: 2.x` → Swagger
//!    - `swagger: "2.0"` → Swagger
//!    - `asyncapi` → AsyncAPI
//!    - a `#%RAML` header → RAML
//! 2. Parse as a WSDL `<definitions>` document
//! 3. Parse as Protobuf IDL with at least one declaration
//! 4. Otherwise, unstructured
//!
//! A routed format that fails validation falls through to the next step, so
//! detection itself never fails. With a hint, only the hinted format is
//! tried and its error is returned.

mod decode;
mod document;
mod endpoint_url;
mod extractor;
mod spec_parser;
mod unstructured;

pub mod asyncapi;
pub mod oas2;
pub mod oas3;
pub mod protobuf;
pub mod raml;
pub mod wsdl;

pub use asyncapi::AsyncApiParser;
pub use decode::ScalarValue;
pub use document::{detect, SpecDocument};
pub use extractor::Extractor;
pub use oas2::Oas2Parser;
pub use oas3::Oas3Parser;
pub use protobuf::ProtobufParser;
pub use raml::RamlParser;
pub use spec_parser::{ParsedSpec, SpecParser};
pub use unstructured::UnstructuredParser;
pub use wsdl::WsdlParser;

pub use specscout_common::{EndpointDefinition, EndpointError, FormatTag, Result};

/// Parse a spec with the well-known port table
///
/// # Arguments
/// * `bytes` - Raw document contents
/// * `hint` - Declared format, or `None` to auto-detect
///
/// # Returns
/// * `ParsedSpec` - Detected format, endpoints and document metadata
pub fn parse_spec(bytes: &[u8], hint: Option<FormatTag>) -> Result<ParsedSpec> {
    SpecParser::new().parse(bytes, hint)
}
