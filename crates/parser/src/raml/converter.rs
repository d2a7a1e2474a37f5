//! Converts a RAML base URI to endpoint definitions

use crate::decode::{scalar_to_string, Mapping};
use crate::endpoint_url::EndpointUrl;
use serde_json::Value;
use specscout_common::{EndpointDefinition, EndpointError, FormatTag, PortResolver, Result};

const VERSION_TOKEN: &str = "{version}";

pub fn convert_raml_to_endpoints(
    document: &Mapping,
    ports: &dyn PortResolver,
) -> Result<Vec<EndpointDefinition>> {
    let base_uri = document
        .get("baseUri")
        .and_then(scalar_to_string)
        .ok_or_else(|| EndpointError::validation(FormatTag::Raml, "no baseUri provided"))?;

    if document.contains_key("baseUriParameters") {
        return Err(EndpointError::validation(
            FormatTag::Raml,
            "baseUriParameters are not supported",
        ));
    }

    let uri = match document.get("version").and_then(scalar_to_string) {
        Some(version) => base_uri.replacen(VERSION_TOKEN, &version, 1),
        None => base_uri,
    };

    let url = parse_base_uri(&uri)?;
    let protocols = declared_protocols(document);

    let endpoints = match protocols.as_slice() {
        [] => {
            let port = url.resolve_port(ports).unwrap_or(0);
            vec![EndpointDefinition::new(&url.scheme, &url.host, port, &url.path)]
        }
        [protocol] => {
            // The port still follows the URI's own scheme
            let port = url.resolve_port(ports).unwrap_or(0);
            vec![EndpointDefinition::new(protocol, &url.host, port, &url.path)]
        }
        _ => protocols
            .iter()
            .map(|protocol| {
                let port = ports.lookup(protocol).unwrap_or(0);
                EndpointDefinition::new(protocol, &url.host, port, &url.path)
            })
            .collect(),
    };

    Ok(endpoints)
}

/// Parse the base URI, assuming `https://` when it has no http(s) scheme
fn parse_base_uri(uri: &str) -> Result<EndpointUrl> {
    match EndpointUrl::parse(uri) {
        Ok(url) if url.scheme.starts_with("http") => Ok(url),
        _ => EndpointUrl::parse(&format!("https://{}", uri))
            .map_err(|e| EndpointError::resolution(FormatTag::Raml, e.to_string())),
    }
}

/// Lower-cased `protocols`; empty if any entry is not HTTP or HTTPS
fn declared_protocols(document: &Mapping) -> Vec<String> {
    let entries: Vec<&Value> = match document.get("protocols") {
        Some(Value::Array(list)) => list.iter().collect(),
        Some(single @ Value::String(_)) => vec![single],
        _ => return Vec::new(),
    };

    let mut protocols = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_str().map(str::to_ascii_lowercase) {
            Some(p) if p == "http" || p == "https" => protocols.push(p),
            _ => return Vec::new(),
        }
    }
    protocols
}
