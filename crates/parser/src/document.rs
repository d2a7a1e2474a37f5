//! Per-call document holder and format detection

use crate::asyncapi::AsyncApiParser;
use crate::decode::{decode_mapping, scalar_to_string};
use crate::extractor::Extractor;
use crate::oas2::Oas2Parser;
use crate::oas3::Oas3Parser;
use crate::protobuf::ProtobufParser;
use crate::raml::{has_raml_header, RamlParser};
use crate::unstructured::UnstructuredParser;
use crate::wsdl::WsdlParser;
use specscout_common::{FormatTag, Result};

/// Raw spec bytes plus the optional declared format
///
/// Lives for a single parse call. [`SpecDocument::select`] binds the
/// extractor, either the one named by the hint or the first one the
/// detection sequence accepts.
pub struct SpecDocument<'a> {
    bytes: &'a [u8],
    hint: Option<FormatTag>,
    extractor: Option<Extractor>,
}

impl<'a> SpecDocument<'a> {
    pub fn new(bytes: &'a [u8], hint: Option<FormatTag>) -> Self {
        Self {
            bytes,
            hint,
            extractor: None,
        }
    }

    /// The bound extractor, once [`SpecDocument::select`] has succeeded
    pub fn extractor(&self) -> Option<&Extractor> {
        self.extractor.as_ref()
    }

    /// Choose and bind the extractor
    ///
    /// With a hint, only that format is tried and its failure is returned.
    /// Without one, detection always succeeds.
    pub fn select(&mut self) -> Result<&Extractor> {
        let extractor = self.choose()?;
        Ok(self.extractor.insert(extractor))
    }

    /// Hand over the bound extractor, selecting one first if needed
    pub fn into_extractor(self) -> Result<Extractor> {
        match self.extractor {
            Some(extractor) => Ok(extractor),
            None => self.choose(),
        }
    }

    fn choose(&self) -> Result<Extractor> {
        match self.hint {
            Some(format) => {
                tracing::debug!(format = %format, "Using declared spec format");
                Extractor::for_format(format, self.bytes)
            }
            None => Ok(detect(self.bytes)),
        }
    }
}

/// Run the ordered detection sequence; never fails
pub fn detect(bytes: &[u8]) -> Extractor {
    if let Some(extractor) = detect_mapping_format(bytes) {
        return extractor;
    }

    match WsdlParser::from_bytes(bytes) {
        Ok(parser) => return Extractor::Wsdl(parser),
        Err(e) => tracing::debug!(error = %e, "Not a WSDL document"),
    }

    match ProtobufParser::from_bytes(bytes) {
        Ok(parser) => return Extractor::Protobuf(parser),
        Err(e) => tracing::debug!(error = %e, "Not a protobuf document"),
    }

    tracing::debug!(size = bytes.len(), "Falling back to unstructured");
    Extractor::Unstructured(UnstructuredParser::from_bytes(bytes))
}

/// Classify a YAML/JSON document by its top-level keys
fn detect_mapping_format(bytes: &[u8]) -> Option<Extractor> {
    let (mapping, content_type) = match decode_mapping(bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::debug!(error = %e, "Not a YAML/JSON mapping");
            return None;
        }
    };

    if let Some(openapi) = mapping.get("openapi") {
        let version = scalar_to_string(openapi).unwrap_or_default();
        return if version.starts_with("3.") {
            accept(Oas3Parser::from_mapping(mapping, content_type).map(Extractor::Oas3))
        } else if version.starts_with("2.") {
            accept(Oas2Parser::from_mapping(mapping, content_type).map(Extractor::Oas2))
        } else {
            tracing::debug!(version = %version, "Unsupported openapi version");
            None
        };
    }

    if let Some(swagger) = mapping.get("swagger") {
        let version = scalar_to_string(swagger).unwrap_or_default();
        return if version == "2.0" {
            accept(Oas2Parser::from_mapping(mapping, content_type).map(Extractor::Oas2))
        } else {
            tracing::debug!(version = %version, "Unsupported swagger version");
            None
        };
    }

    if mapping.contains_key("asyncapi") {
        return Some(Extractor::AsyncApi(AsyncApiParser::from_mapping(
            mapping,
            content_type,
        )));
    }

    if has_raml_header(bytes) {
        return Some(Extractor::Raml(RamlParser::from_mapping(mapping)));
    }

    None
}

/// Keep a routed extractor, or log why it was rejected
fn accept(result: Result<Extractor>) -> Option<Extractor> {
    match result {
        Ok(extractor) => Some(extractor),
        Err(e) => {
            tracing::debug!(error = %e, "Routed format rejected the document");
            None
        }
    }
}
