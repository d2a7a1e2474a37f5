//! Closed set of format extractors
//!
//! Every supported format is one variant; dispatch is a `match` so adding
//! a format means adding a variant and letting the compiler point at every
//! place that needs to handle it.

use crate::asyncapi::AsyncApiParser;
use crate::oas2::Oas2Parser;
use crate::oas3::Oas3Parser;
use crate::protobuf::ProtobufParser;
use crate::raml::RamlParser;
use crate::unstructured::UnstructuredParser;
use crate::wsdl::WsdlParser;
use specscout_common::{EndpointDefinition, FormatTag, PortResolver, Result, SpecContentType};

/// A decoded document bound to the extractor for its format
pub enum Extractor {
    Oas2(Oas2Parser),
    Oas3(Oas3Parser),
    Wsdl(WsdlParser),
    AsyncApi(AsyncApiParser),
    Raml(RamlParser),
    Protobuf(ProtobufParser),
    Unstructured(UnstructuredParser),
}

impl Extractor {
    /// Instantiate the extractor for `format` directly, without detection
    ///
    /// Decode failures surface as [`specscout_common::EndpointError::FormatDetection`]
    /// and structural failures as [`specscout_common::EndpointError::Validation`].
    pub fn for_format(format: FormatTag, bytes: &[u8]) -> Result<Self> {
        Ok(match format {
            FormatTag::Oas2 => Extractor::Oas2(Oas2Parser::from_bytes(bytes)?),
            FormatTag::Oas3 => Extractor::Oas3(Oas3Parser::from_bytes(bytes)?),
            FormatTag::Wsdl => Extractor::Wsdl(WsdlParser::from_bytes(bytes)?),
            FormatTag::AsyncApi => Extractor::AsyncApi(AsyncApiParser::from_bytes(bytes)?),
            FormatTag::Raml => Extractor::Raml(RamlParser::from_bytes(bytes)?),
            FormatTag::Protobuf => Extractor::Protobuf(ProtobufParser::from_bytes(bytes)?),
            FormatTag::Unstructured => {
                Extractor::Unstructured(UnstructuredParser::from_bytes(bytes))
            }
        })
    }

    pub fn resource_type(&self) -> FormatTag {
        match self {
            Extractor::Oas2(p) => p.resource_type(),
            Extractor::Oas3(p) => p.resource_type(),
            Extractor::Wsdl(p) => p.resource_type(),
            Extractor::AsyncApi(p) => p.resource_type(),
            Extractor::Raml(p) => p.resource_type(),
            Extractor::Protobuf(p) => p.resource_type(),
            Extractor::Unstructured(p) => p.resource_type(),
        }
    }

    /// Derive the endpoint list for the bound document
    pub fn endpoints(&self, ports: &dyn PortResolver) -> Result<Vec<EndpointDefinition>> {
        match self {
            Extractor::Oas2(p) => p.endpoints(),
            Extractor::Oas3(p) => p.endpoints(ports),
            Extractor::Wsdl(p) => p.endpoints(ports),
            Extractor::AsyncApi(p) => p.endpoints(),
            Extractor::Raml(p) => p.endpoints(ports),
            Extractor::Protobuf(p) => Ok(p.endpoints()),
            Extractor::Unstructured(p) => Ok(p.endpoints()),
        }
    }

    /// Document title, or the WSDL definitions name; empty when absent
    pub fn title(&self) -> String {
        match self {
            Extractor::Oas2(p) => p.title().to_string(),
            Extractor::Oas3(p) => p.title().to_string(),
            Extractor::Wsdl(p) => p.title().to_string(),
            Extractor::AsyncApi(p) => p.title(),
            Extractor::Raml(p) => p.title(),
            Extractor::Protobuf(p) => p.package().to_string(),
            Extractor::Unstructured(_) => String::new(),
        }
    }

    pub fn version(&self) -> String {
        match self {
            Extractor::Oas2(p) => p.version(),
            Extractor::Oas3(p) => p.version(),
            Extractor::AsyncApi(p) => p.version(),
            Extractor::Raml(p) => p.version(),
            Extractor::Wsdl(_) | Extractor::Protobuf(_) | Extractor::Unstructured(_) => {
                String::new()
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            Extractor::Oas2(p) => p.description().to_string(),
            Extractor::Oas3(p) => p.description().to_string(),
            Extractor::AsyncApi(p) => p.description(),
            Extractor::Raml(p) => p.description(),
            Extractor::Wsdl(_) | Extractor::Protobuf(_) | Extractor::Unstructured(_) => {
                String::new()
            }
        }
    }

    /// Serialization the document was read as; `None` for raw formats
    pub fn content_type(&self) -> Option<SpecContentType> {
        match self {
            Extractor::Oas2(p) => Some(p.content_type()),
            Extractor::Oas3(p) => Some(p.content_type()),
            Extractor::Wsdl(p) => Some(p.content_type()),
            Extractor::AsyncApi(p) => Some(p.content_type()),
            Extractor::Raml(p) => Some(p.content_type()),
            Extractor::Protobuf(_) | Extractor::Unstructured(_) => None,
        }
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Extractor").field(&self.resource_type()).finish()
    }
}
