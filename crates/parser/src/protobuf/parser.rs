//! Protobuf source parser

use prost_types::{FileDescriptorProto, FileOptions};
use specscout_common::{EndpointDefinition, EndpointError, FormatTag, Result};

/// File name reported in grammar errors
const SOURCE_NAME: &str = "spec.proto";

/// Protobuf IDL parser
pub struct ProtobufParser {
    /// Descriptor built from the source text
    descriptor: FileDescriptorProto,
}

impl ProtobufParser {
    /// Parse `.proto` source text; requires at least one top-level declaration
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let source = std::str::from_utf8(bytes).map_err(|e| {
            EndpointError::detection(FormatTag::Protobuf, format!("not UTF-8: {}", e))
        })?;

        let descriptor = protox_parse::parse(SOURCE_NAME, source).map_err(|e| {
            EndpointError::detection(
                FormatTag::Protobuf,
                format!("Failed to parse protobuf source: {}", e),
            )
        })?;

        let parser = Self { descriptor };
        if parser.declaration_count() == 0 {
            return Err(EndpointError::detection(
                FormatTag::Protobuf,
                "invalid protobuf specification: no top-level declarations",
            ));
        }

        Ok(parser)
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::Protobuf
    }

    /// Always empty
    pub fn endpoints(&self) -> Vec<EndpointDefinition> {
        Vec::new()
    }

    /// Number of top-level declarations in the source
    pub fn declaration_count(&self) -> usize {
        let d = &self.descriptor;
        usize::from(d.syntax.is_some())
            + usize::from(d.package.is_some())
            + usize::from(d.options.as_ref().is_some_and(|o| *o != FileOptions::default()))
            + d.dependency.len()
            + d.message_type.len()
            + d.enum_type.len()
            + d.service.len()
            + d.extension.len()
    }

    /// Declared package, empty when none
    pub fn package(&self) -> &str {
        self.descriptor.package.as_deref().unwrap_or_default()
    }

    /// Names of the declared gRPC services
    pub fn service_names(&self) -> Vec<&str> {
        self.descriptor
            .service
            .iter()
            .filter_map(|s| s.name.as_deref())
            .collect()
    }

    /// Get reference to the underlying descriptor
    pub fn descriptor(&self) -> &FileDescriptorProto {
        &self.descriptor
    }
}
