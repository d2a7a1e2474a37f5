//! Converts a Swagger document to endpoint definitions

use super::types::Swagger;
use specscout_common::{EndpointDefinition, EndpointError, FormatTag, Result};

/// Port used when `host` carries none, or a non-numeric one
const DEFAULT_PORT: u16 = 443;

const VALID_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Build one endpoint per scheme, sharing host, port and base path
pub fn convert_swagger_to_endpoints(spec: &Swagger) -> Result<Vec<EndpointDefinition>> {
    let raw_host = spec.host.as_deref().unwrap_or_default();
    let (host, port) = split_host(raw_host);

    if host.is_empty() {
        return Err(EndpointError::resolution(
            FormatTag::Oas2,
            "no host defined in the specification",
        ));
    }

    let base_path = match spec.base_path.as_deref() {
        Some(path) if !path.is_empty() => path,
        _ => "/",
    };

    // Without schemes the API is assumed to be served over https only
    if spec.schemes.is_empty() {
        return Ok(vec![EndpointDefinition::new(
            "https", host, port, base_path,
        )]);
    }

    spec.schemes
        .iter()
        .map(|scheme| {
            let protocol = scheme.to_ascii_lowercase();
            if !VALID_SCHEMES.contains(&protocol.as_str()) {
                return Err(EndpointError::resolution(
                    FormatTag::Oas2,
                    format!("invalid endpoint scheme '{}' defined in specification", scheme),
                ));
            }
            Ok(EndpointDefinition::new(protocol, host, port, base_path))
        })
        .collect()
}

/// Split "host:port"; the port falls back to [`DEFAULT_PORT`]
fn split_host(raw: &str) -> (&str, u16) {
    let mut parts = raw.split(':');
    let host = parts.next().unwrap_or_default();
    let port = parts
        .next()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    (host, port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas2::types::ScalarValue;

    fn swagger(host: &str, schemes: &[&str], base_path: Option<&str>) -> Swagger {
        Swagger {
            swagger: Some(ScalarValue::String("2.0".to_string())),
            info: None,
            host: Some(host.to_string()),
            base_path: base_path.map(String::from),
            schemes: schemes.iter().map(|s| s.to_string()).collect(),
            paths: Some(serde_json::json!({})),
        }
    }

    #[test]
    fn test_split_host() {
        assert_eq!(split_host("foo.com:8080"), ("foo.com", 8080));
        assert_eq!(split_host("foo.com"), ("foo.com", 443));
        assert_eq!(split_host("foo.com:abc"), ("foo.com", 443));
        assert_eq!(split_host("foo.com:99999"), ("foo.com", 443));
    }

    #[test]
    fn test_one_endpoint_per_scheme_in_order() {
        let spec = swagger("foo.com:8080", &["http", "https"], Some("/v1"));
        let endpoints = convert_swagger_to_endpoints(&spec).unwrap();

        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0].protocol, "http");
        assert_eq!(endpoints[1].protocol, "https");
        for ep in &endpoints {
            assert_eq!(ep.host, "foo.com");
            assert_eq!(ep.port, 8080);
            assert_eq!(ep.base_path, "/v1");
        }
    }

    #[test]
    fn test_no_schemes_defaults_to_https() {
        let spec = swagger("foo.com", &[], None);
        let endpoints = convert_swagger_to_endpoints(&spec).unwrap();

        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].protocol, "https");
        assert_eq!(endpoints[0].port, 443);
        assert_eq!(endpoints[0].base_path, "/");
    }

    #[test]
    fn test_missing_host_fails() {
        let spec = swagger("", &["https"], None);
        let err = convert_swagger_to_endpoints(&spec).unwrap_err();
        assert!(matches!(err, EndpointError::EndpointResolution { .. }));
    }

    #[test]
    fn test_invalid_scheme_fails() {
        let spec = swagger("foo.com", &["https", "ftp"], None);
        let err = convert_swagger_to_endpoints(&spec).unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }
}
