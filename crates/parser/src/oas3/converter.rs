//! Converts OpenAPI 3.x servers to endpoint definitions

use super::types::{OpenApiSpec, Server};
use crate::endpoint_url::EndpointUrl;
use specscout_common::{EndpointDefinition, EndpointError, FormatTag, PortResolver, Result};

/// Convert every server to endpoints and concatenate them in server order
pub fn convert_servers_to_endpoints(
    spec: &OpenApiSpec,
    ports: &dyn PortResolver,
) -> Result<Vec<EndpointDefinition>> {
    if spec.servers.is_empty() {
        return Err(EndpointError::resolution(
            FormatTag::Oas3,
            "no server endpoints defined",
        ));
    }

    let mut endpoints = Vec::new();
    for server in &spec.servers {
        endpoints.extend(server_endpoints(server, ports)?);
    }
    Ok(endpoints)
}

/// Endpoints for one server, the default URL's endpoint first
fn server_endpoints(server: &Server, ports: &dyn PortResolver) -> Result<Vec<EndpointDefinition>> {
    let (default_url, urls) = expand_server_url(server)?;

    let mut endpoints = Vec::with_capacity(urls.len());
    let mut default_index = None;
    for url in &urls {
        let endpoint = endpoint_from_url(url, ports)?;
        if default_index.is_none() && *url == default_url {
            default_index = Some(endpoints.len());
        }
        endpoints.push(endpoint);
    }

    if let Some(index) = default_index {
        let default_endpoint = endpoints.remove(index);
        endpoints.insert(0, default_endpoint);
    }

    Ok(endpoints)
}

/// Substitute template variables into the server URL
///
/// Returns the all-defaults URL and the full expansion set. Values of the
/// first placeholder vary fastest.
pub(crate) fn expand_server_url(server: &Server) -> Result<(String, Vec<String>)> {
    for (name, variable) in &server.variables {
        if variable.default_value().is_none() {
            return Err(missing_default(name));
        }
    }

    let mut default_url = server.url.clone();
    let mut urls = vec![server.url.clone()];

    for name in server.placeholders() {
        let variable = server.variables.get(name);
        let default = variable
            .and_then(|v| v.default_value())
            .ok_or_else(|| missing_default(name))?;

        let token = format!("{{{}}}", name);
        default_url = default_url.replace(&token, &default);

        let values: Vec<String> = match variable {
            Some(v) if !v.enum_values.is_empty() => {
                v.enum_values.iter().map(ToString::to_string).collect()
            }
            _ => vec![default],
        };

        let token = token.as_str();
        urls = values
            .iter()
            .flat_map(|value| urls.iter().map(move |url| url.replace(token, value)))
            .collect();
    }

    Ok((default_url, urls))
}

fn endpoint_from_url(url: &str, ports: &dyn PortResolver) -> Result<EndpointDefinition> {
    let parsed =
        EndpointUrl::parse(url).map_err(|e| EndpointError::resolution(FormatTag::Oas3, e.to_string()))?;

    // Unknown schemes keep port 0 rather than failing
    let port = parsed.resolve_port(ports).unwrap_or(0);

    Ok(EndpointDefinition::new(
        parsed.scheme,
        parsed.host,
        port,
        parsed.path,
    ))
}

fn missing_default(name: &str) -> EndpointError {
    let err = EndpointError::resolution(
        FormatTag::Oas3,
        format!(
            "server variable {} does not have a default value, spec not valid",
            name
        ),
    );
    tracing::error!(variable = name, "{}", err);
    err
}
