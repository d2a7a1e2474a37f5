//! Protocol name to TCP port resolution
//!
//! Extractors never consult the host's service database directly. They go
//! through a [`PortResolver`], which makes the lookup injectable and keeps
//! parsing deterministic across machines. [`ServicePortTable`] is the stock
//! implementation: a built-in table of well-known IANA service names that can
//! be extended from a YAML file.

use crate::{EndpointError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Resolves a protocol/service name to its default TCP port
pub trait PortResolver {
    /// Returns `None` when the name is unknown
    fn lookup(&self, protocol: &str) -> Option<u16>;
}

/// Well-known TCP service ports, keyed by lower-case IANA service name
const WELL_KNOWN_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("ssh", 22),
    ("telnet", 23),
    ("smtp", 25),
    ("domain", 53),
    ("gopher", 70),
    ("http", 80),
    ("www", 80),
    ("ws", 80),
    ("pop3", 110),
    ("nntp", 119),
    ("imap", 143),
    ("snmp", 161),
    ("ldap", 389),
    ("https", 443),
    ("wss", 443),
    ("submission", 587),
    ("ldaps", 636),
    ("imaps", 993),
    ("pop3s", 995),
    ("mqtt", 1883),
    ("nats", 4222),
    ("amqps", 5671),
    ("amqp", 5672),
    ("secure-mqtt", 8883),
];

/// Table-backed [`PortResolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePortTable {
    ports: HashMap<String, u16>,
}

/// On-disk layout of a port override file
///
/// ```yaml
/// version: 1
/// ports:
///   kafka: 9092
///   stomp: 61613
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServicePortsFile {
    /// File format version
    pub version: u32,
    /// Service name to port overrides
    #[serde(default)]
    pub ports: BTreeMap<String, u16>,
}

impl ServicePortTable {
    /// An empty table that resolves nothing
    pub fn empty() -> Self {
        Self {
            ports: HashMap::new(),
        }
    }

    /// The built-in table of well-known service names
    pub fn well_known() -> Self {
        Self {
            ports: WELL_KNOWN_PORTS
                .iter()
                .map(|(name, port)| (name.to_string(), *port))
                .collect(),
        }
    }

    /// Add or replace a single entry
    pub fn with_entry(mut self, protocol: &str, port: u16) -> Self {
        self.ports.insert(protocol.to_ascii_lowercase(), port);
        self
    }

    /// Merge entries from `other`, which win on conflict
    pub fn merge(mut self, other: ServicePortTable) -> Self {
        self.ports.extend(other.ports);
        self
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Load a YAML override file and layer it over the well-known table
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let file = Self::from_yaml(&content).map_err(|e| match e {
            EndpointError::Config(msg) => {
                EndpointError::Config(format!("{} (in {:?})", msg, path))
            }
            other => other,
        })?;

        Ok(Self::well_known().merge(file))
    }

    /// Parse a port override document on its own, without the built-in entries
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: ServicePortsFile = serde_yaml::from_str(content)
            .map_err(|e| EndpointError::Config(format!("Failed to parse port table YAML: {}", e)))?;

        if file.version != 1 {
            return Err(EndpointError::Config(format!(
                "Unsupported port table version: {}",
                file.version
            )));
        }

        Ok(file
            .ports
            .iter()
            .fold(Self::empty(), |table, (name, port)| {
                table.with_entry(name, *port)
            }))
    }
}

impl Default for ServicePortTable {
    fn default() -> Self {
        Self::well_known()
    }
}

impl PortResolver for ServicePortTable {
    fn lookup(&self, protocol: &str) -> Option<u16> {
        self.ports.get(&protocol.to_ascii_lowercase()).copied()
    }
}

impl<T: PortResolver + ?Sized> PortResolver for &T {
    fn lookup(&self, protocol: &str) -> Option<u16> {
        (**self).lookup(protocol)
    }
}

impl<T: PortResolver + ?Sized> PortResolver for Box<T> {
    fn lookup(&self, protocol: &str) -> Option<u16> {
        (**self).lookup(protocol)
    }
}

impl<T: PortResolver + ?Sized> PortResolver for std::sync::Arc<T> {
    fn lookup(&self, protocol: &str) -> Option<u16> {
        (**self).lookup(protocol)
    }
}
