//! WSDL definitions tree, reduced to services and their port addresses

use serde::{Deserialize, Serialize};

/// `<definitions>` root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Definitions {
    pub name: Option<String>,
    pub target_namespace: Option<String>,
    pub services: Vec<Service>,
}

/// `<service>` element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    pub name: Option<String>,
    pub ports: Vec<Port>,
}

/// `<port>` element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Port {
    pub name: Option<String>,
    pub binding: Option<String>,
    /// `location` attribute of the port's address element
    pub location: Option<String>,
}
