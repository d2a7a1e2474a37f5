//! WSDL XML parser

use super::types::{Definitions, Port, Service};
use roxmltree::{Document, Node};
use specscout_common::{
    EndpointDefinition, EndpointError, FormatTag, PortResolver, Result, SpecContentType,
};

const DEFINITIONS: &str = "definitions";

/// WSDL 1.1 parser
pub struct WsdlParser {
    definitions: Definitions,
}

impl WsdlParser {
    /// Decode a `<definitions>` document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| EndpointError::detection(FormatTag::Wsdl, format!("not UTF-8: {}", e)))?;

        let doc = Document::parse(text).map_err(|e| {
            EndpointError::detection(FormatTag::Wsdl, format!("Failed to parse XML: {}", e))
        })?;

        let root = doc.root_element();
        if root.tag_name().name() != DEFINITIONS {
            return Err(EndpointError::detection(
                FormatTag::Wsdl,
                format!(
                    "expected <{}> root element, found <{}>",
                    DEFINITIONS,
                    root.tag_name().name()
                ),
            ));
        }

        Ok(Self {
            definitions: read_definitions(root),
        })
    }

    pub fn resource_type(&self) -> FormatTag {
        FormatTag::Wsdl
    }

    /// Derive deduplicated endpoints from every service port
    pub fn endpoints(&self, ports: &dyn PortResolver) -> Result<Vec<EndpointDefinition>> {
        super::converter::convert_definitions_to_endpoints(&self.definitions, ports)
    }

    pub fn title(&self) -> &str {
        self.definitions.name.as_deref().unwrap_or_default()
    }

    pub fn content_type(&self) -> SpecContentType {
        SpecContentType::Xml
    }

    /// Get reference to the decoded definitions
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }
}

fn read_definitions(root: Node) -> Definitions {
    Definitions {
        name: root.attribute("name").map(String::from),
        target_namespace: root.attribute("targetNamespace").map(String::from),
        services: children_named(root, "service")
            .map(|service| Service {
                name: service.attribute("name").map(String::from),
                ports: children_named(service, "port").map(read_port).collect(),
            })
            .collect(),
    }
}

fn read_port(port: Node) -> Port {
    Port {
        name: port.attribute("name").map(String::from),
        binding: port.attribute("binding").map(String::from),
        location: children_named(port, "address")
            .find_map(|address| address.attribute("location"))
            .map(String::from),
    }
}

/// Child elements matched on local name, whatever their namespace prefix
fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}
