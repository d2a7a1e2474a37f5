//! Integration test for OpenAPI 3 parser

use mockall::mock;
use specscout_common::{EndpointError, FormatTag, PortResolver, ServicePortTable};
use specscout_parser::{Oas3Parser, SpecParser};

mock! {
    pub Ports {}

    impl PortResolver for Ports {
        fn lookup(&self, protocol: &str) -> Option<u16>;
    }
}

const PETSTORE_YAML: &str = r#"
openapi: 3.0.3
info:
  title: Swagger Petstore
  version: 1.0.11
  description: Sample pet store server
servers:
  - url: https://{region}.petstore.example.com:{port}/api/{basePath}
    description: Regional servers
    variables:
      region:
        default: eu
        enum: [us, eu]
      port:
        default: 8443
      basePath:
        default: v3
  - url: http://legacy.petstore.example.com/v2
paths:
  /pet:
    get:
      operationId: listPets
"#;

#[test]
fn test_parse_petstore() {
    let parser = Oas3Parser::from_bytes(PETSTORE_YAML.as_bytes()).unwrap();
    assert_eq!(parser.title(), "Swagger Petstore");
    assert_eq!(parser.version(), "1.0.11");
    assert_eq!(parser.spec().servers.len(), 2);

    let endpoints = parser.endpoints(&ServicePortTable::well_known()).unwrap();
    assert_eq!(endpoints.len(), 3, "two regions plus the legacy server");

    // Default URL first within its server
    assert_eq!(endpoints[0].host, "eu.petstore.example.com");
    assert_eq!(endpoints[0].port, 8443);
    assert_eq!(endpoints[0].protocol, "https");
    assert_eq!(endpoints[0].base_path, "/api/v3");

    assert_eq!(endpoints[1].host, "us.petstore.example.com");
    assert_eq!(endpoints[1].port, 8443);

    // Servers stay in declaration order
    assert_eq!(endpoints[2].host, "legacy.petstore.example.com");
    assert_eq!(endpoints[2].port, 80);
    assert_eq!(endpoints[2].protocol, "http");
    assert_eq!(endpoints[2].base_path, "/v2");
}

#[test]
fn test_enum_expansion_puts_default_first() {
    let spec = r#"{
        "openapi": "3.0.1",
        "info": {"title": "Expansion"},
        "paths": {},
        "servers": [{
            "url": "https://{a}.com",
            "variables": {"a": {"default": "x", "enum": ["y", "x"]}}
        }]
    }"#;

    let parsed = SpecParser::new().parse(spec.as_bytes(), None).unwrap();
    assert_eq!(parsed.format, FormatTag::Oas3);

    let hosts: Vec<&str> = parsed.endpoints.iter().map(|e| e.host.as_str()).collect();
    assert_eq!(hosts, vec!["x.com", "y.com"]);
}

#[test]
fn test_cartesian_product_of_enums() {
    let spec = r#"
openapi: 3.1.0
info:
  title: Cartesian
paths: {}
servers:
  - url: "{scheme}://{env}.example.com"
    variables:
      scheme:
        default: https
        enum: [http, https]
      env:
        default: prod
        enum: [prod, dev, qa]
"#;

    let parser = Oas3Parser::from_bytes(spec.as_bytes()).unwrap();
    let endpoints = parser.endpoints(&ServicePortTable::well_known()).unwrap();
    assert_eq!(endpoints.len(), 6);

    assert_eq!(endpoints[0].protocol, "https");
    assert_eq!(endpoints[0].host, "prod.example.com");
    assert_eq!(endpoints[0].port, 443);

    let http = endpoints.iter().filter(|e| e.protocol == "http").count();
    assert_eq!(http, 3);
    assert!(endpoints
        .iter()
        .filter(|e| e.protocol == "http")
        .all(|e| e.port == 80));
}

#[test]
fn test_missing_default_aborts_whole_parse() {
    let spec = r#"{
        "openapi": "3.0.1",
        "info": {"title": "Broken"},
        "paths": {},
        "servers": [
            {"url": "https://ok.example.com"},
            {"url": "https://{tenant}.example.com", "variables": {"tenant": {"enum": ["a", "b"]}}}
        ]
    }"#;

    let err = SpecParser::new().parse(spec.as_bytes(), None).unwrap_err();
    assert!(matches!(err, EndpointError::EndpointResolution { .. }));
    assert!(err.to_string().contains("tenant"));
}

#[test]
fn test_undeclared_placeholder_is_missing_default() {
    let spec = "openapi: 3.0.0\ninfo:\n  title: t\npaths: {}\nservers:\n  - url: https://{undeclared}.example.com\n";
    let parser = Oas3Parser::from_bytes(spec.as_bytes()).unwrap();

    let err = parser
        .endpoints(&ServicePortTable::well_known())
        .unwrap_err();
    assert!(err.to_string().contains("undeclared"));
}

#[test]
fn test_relative_server_url_is_error() {
    let spec = "openapi: 3.0.0\ninfo:\n  title: t\npaths: {}\nservers:\n  - url: /api/v1\n";
    let parser = Oas3Parser::from_bytes(spec.as_bytes()).unwrap();

    let err = parser
        .endpoints(&ServicePortTable::well_known())
        .unwrap_err();
    assert_eq!(err.format(), Some(FormatTag::Oas3));
}

#[test]
fn test_no_servers_is_error() {
    let spec = "openapi: 3.0.0\ninfo:\n  title: t\npaths: {}\n";
    let parser = Oas3Parser::from_bytes(spec.as_bytes()).unwrap();
    assert!(parser.spec().servers.is_empty());

    let err = SpecParser::new().parse(spec.as_bytes(), None).unwrap_err();
    assert!(matches!(err, EndpointError::EndpointResolution { .. }));
    assert_eq!(err.format(), Some(FormatTag::Oas3));
    assert!(err.to_string().contains("no server endpoints defined"));
}

#[test]
fn test_port_lookup_is_injected() {
    let spec = "openapi: 3.0.0\ninfo:\n  title: t\npaths: {}\nservers:\n  - url: https://api.example.com/v1\n  - url: grpc://rpc.example.com\n";
    let parser = Oas3Parser::from_bytes(spec.as_bytes()).unwrap();

    let mut ports = MockPorts::new();
    ports
        .expect_lookup()
        .withf(|protocol| protocol == "https")
        .times(1)
        .returning(|_| Some(9443));
    ports
        .expect_lookup()
        .withf(|protocol| protocol == "grpc")
        .times(1)
        .returning(|_| None);

    let endpoints = parser.endpoints(&ports).unwrap();
    assert_eq!(endpoints[0].port, 9443);

    // Unknown protocols leave the port unresolved without failing
    assert_eq!(endpoints[1].port, 0);
    assert_eq!(endpoints[1].protocol, "grpc");
}

#[test]
fn test_explicit_port_skips_lookup() {
    let spec = "openapi: 3.0.0\ninfo:\n  title: t\npaths: {}\nservers:\n  - url: https://api.example.com:8443\n";
    let parser = Oas3Parser::from_bytes(spec.as_bytes()).unwrap();

    let mut ports = MockPorts::new();
    ports.expect_lookup().never();

    let endpoints = parser.endpoints(&ports).unwrap();
    assert_eq!(endpoints[0].port, 8443);
}

#[test]
fn test_validation_errors() {
    let cases = [
        (r#"{"openapi": "3.0.0", "paths": {}}"#, "info"),
        (r#"{"openapi": "3.0.0", "info": {"title": ""}, "paths": {}}"#, "title"),
        (r#"{"openapi": "3.0.0", "info": {"title": "t"}}"#, "paths"),
    ];

    for (spec, missing) in cases {
        let err = match Oas3Parser::from_bytes(spec.as_bytes()) {
            Ok(_) => panic!("{} should be rejected", spec),
            Err(e) => e,
        };
        assert!(matches!(err, EndpointError::Validation { .. }));
        assert!(
            err.to_string().contains(missing),
            "error for {} should mention {}: {}",
            spec,
            missing,
            err
        );
    }
}

#[test]
fn test_base_path_is_decoded() {
    let spec = r#"{
        "openapi": "3.0.2",
        "info": {"title": "Cafe"},
        "paths": {},
        "servers": [{
            "url": "https://a.com/caf%C3%A9/{v}",
            "variables": {"v": {"default": "x y"}}
        }]
    }"#;

    let parsed = SpecParser::new().parse(spec.as_bytes(), None).unwrap();
    assert_eq!(parsed.endpoints.len(), 1);
    assert_eq!(parsed.endpoints[0].base_path, "/café/x y");
}
