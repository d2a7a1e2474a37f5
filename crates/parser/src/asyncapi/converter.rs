//! Converts AsyncAPI servers to endpoint definitions

use crate::decode::{scalar_to_string, str_field, Mapping};
use crate::endpoint_url::EndpointUrl;
use serde_json::Value;
use specscout_common::{EndpointDefinition, EndpointError, FormatTag, Result};
use std::collections::BTreeMap;

/// One endpoint per server entry; entries that are not mappings are skipped
pub fn convert_servers_to_endpoints(document: &Mapping) -> Result<Vec<EndpointDefinition>> {
    let Some(servers) = document.get("servers").and_then(Value::as_object) else {
        return Ok(Vec::new());
    };

    servers
        .iter()
        .filter_map(|(name, server)| server.as_object().map(|s| (name, s)))
        .map(|(name, server)| {
            tracing::debug!(server = %name, "reading asyncapi server");
            server_endpoint(server)
        })
        .collect()
}

fn server_endpoint(server: &Mapping) -> Result<EndpointDefinition> {
    let protocol = string_field(server, "protocol");
    let mut server_url = server_address(server);

    for (name, value) in variable_defaults(server) {
        server_url = server_url.replace(&format!("{{{}}}", name), &value);
    }

    let full_url = if server_url.contains("://") {
        server_url
    } else {
        format!("{}://{}", protocol, server_url)
    };

    let url = EndpointUrl::parse(&full_url)
        .map_err(|e| EndpointError::resolution(FormatTag::AsyncApi, e.to_string()))?;

    let details: BTreeMap<String, Value> = server
        .get("bindings")
        .and_then(Value::as_object)
        .map(|bindings| {
            bindings
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    // No protocol-based port resolution for message brokers
    Ok(
        EndpointDefinition::new(protocol, url.host, url.port.unwrap_or(0), url.path)
            .with_details(details),
    )
}

/// `url` (AsyncAPI 2) or `host` + `pathname` (AsyncAPI 3)
fn server_address(server: &Mapping) -> String {
    let url = string_field(server, "url");
    if !url.is_empty() {
        return url;
    }
    format!(
        "{}{}",
        string_field(server, "host"),
        string_field(server, "pathname")
    )
}

/// Variable name to default value; enum values are ignored
fn variable_defaults(server: &Mapping) -> Vec<(String, String)> {
    server
        .get("variables")
        .and_then(Value::as_object)
        .map(|vars| {
            vars.iter()
                .filter_map(|(name, var)| {
                    let default = var
                        .as_object()?
                        .get("default")
                        .and_then(scalar_to_string)
                        .unwrap_or_default();
                    Some((name.clone(), default))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(mapping: &Mapping, key: &str) -> String {
    str_field(mapping, key).unwrap_or_default().to_string()
}
