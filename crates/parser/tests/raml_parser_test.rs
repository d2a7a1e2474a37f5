//! Integration test for RAML parser

use specscout_common::{EndpointError, FormatTag, ServicePortTable};
use specscout_parser::{parse_spec, RamlParser, SpecParser};

const GITHUB_RAML: &str = r#"#%RAML 1.0
title: GitHub API
version: v3
description: Repository hosting
baseUri: https://api.github.com/{version}
protocols: [HTTP, HTTPS]
mediaType: application/json
/repos:
  get:
    description: List repositories
"#;

#[test]
fn test_both_protocols_use_default_ports() {
    let parsed = parse_spec(GITHUB_RAML.as_bytes(), None).unwrap();
    assert_eq!(parsed.format, FormatTag::Raml);
    assert_eq!(parsed.title, "GitHub API");
    assert_eq!(parsed.version, "v3");

    let endpoints = parsed.endpoints;
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].protocol, "http");
    assert_eq!(endpoints[0].port, 80);
    assert_eq!(endpoints[1].protocol, "https");
    assert_eq!(endpoints[1].port, 443);
    for endpoint in &endpoints {
        assert_eq!(endpoint.host, "api.github.com");
        assert_eq!(endpoint.base_path, "/v3");
    }
}

#[test]
fn test_raml_08_header() {
    let raml = "#%RAML 0.8\ntitle: Legacy\nbaseUri: http://legacy.example.com:8080/api\n";
    let parser = RamlParser::from_bytes(raml.as_bytes()).unwrap();
    let endpoints = parser.endpoints(&ServicePortTable::well_known()).unwrap();

    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].protocol, "http");
    assert_eq!(endpoints[0].port, 8080);
    assert_eq!(endpoints[0].base_path, "/api");
}

#[test]
fn test_hint_requires_header() {
    let err = SpecParser::new()
        .parse(
            b"title: Headless\nbaseUri: https://a.com\n",
            Some(FormatTag::Raml),
        )
        .unwrap_err();
    assert!(matches!(err, EndpointError::FormatDetection { .. }));
}

#[test]
fn test_base_uri_parameters_rejected() {
    let raml = r#"#%RAML 1.0
title: Regional
baseUri: https://{region}.example.com
baseUriParameters:
  region:
    enum: [eu, us]
"#;

    let err = parse_spec(raml.as_bytes(), None).unwrap_err();
    assert!(matches!(err, EndpointError::Validation { .. }));
    assert_eq!(err.format(), Some(FormatTag::Raml));
}

#[test]
fn test_missing_base_uri_rejected() {
    let err = parse_spec(b"#%RAML 1.0\ntitle: Nowhere\n", None).unwrap_err();
    assert!(err.to_string().contains("baseUri"));
}

#[test]
fn test_single_protocol_keeps_uri_port() {
    let raml = "#%RAML 1.0\ntitle: Downgrade\nbaseUri: https://a.com/api\nprotocols: [HTTP]\n";
    let parsed = parse_spec(raml.as_bytes(), None).unwrap();

    assert_eq!(parsed.endpoints.len(), 1);
    assert_eq!(parsed.endpoints[0].protocol, "http");
    assert_eq!(parsed.endpoints[0].port, 443);
}

#[test]
fn test_include_tags_detected_and_hinted() {
    let raml = r#"#%RAML 1.0
title: Library
baseUri: https://library.example.com/v1
uses:
  lib: !include libraries/common.raml
types: !include types.raml
/books:
  get:
    responses:
      200:
        body:
          application/json:
            example: !include examples/books.json
"#;

    let detected = parse_spec(raml.as_bytes(), None).unwrap();
    assert_eq!(detected.format, FormatTag::Raml);
    assert_eq!(detected.title, "Library");
    assert_eq!(detected.endpoints.len(), 1);
    assert_eq!(detected.endpoints[0].host, "library.example.com");
    assert_eq!(detected.endpoints[0].base_path, "/v1");

    let hinted = parse_spec(raml.as_bytes(), Some(FormatTag::Raml)).unwrap();
    assert_eq!(hinted, detected);
}
