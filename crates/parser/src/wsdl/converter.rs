//! Converts WSDL service ports to endpoint definitions

use super::types::Definitions;
use crate::endpoint_url::EndpointUrl;
use specscout_common::{
    dedup_endpoints, EndpointDefinition, EndpointError, FormatTag, PortResolver, Result,
};

pub fn convert_definitions_to_endpoints(
    definitions: &Definitions,
    ports: &dyn PortResolver,
) -> Result<Vec<EndpointDefinition>> {
    let mut endpoints = Vec::new();

    for service in &definitions.services {
        for port in &service.ports {
            let Some(location) = port.location.as_deref() else {
                continue;
            };

            let url = EndpointUrl::parse(location)
                .map_err(|e| EndpointError::resolution(FormatTag::Wsdl, e.to_string()))?;

            let tcp_port = url.resolve_port(ports).ok_or_else(|| {
                EndpointError::resolution(
                    FormatTag::Wsdl,
                    format!("unknown port for protocol {} in {}", url.scheme, location),
                )
            })?;

            endpoints.push(EndpointDefinition::new(
                url.scheme, url.host, tcp_port, url.path,
            ));
        }
    }

    Ok(dedup_endpoints(endpoints))
}
