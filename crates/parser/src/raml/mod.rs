//! RAML 0.8 / 1.0 endpoint extraction
//!
//! Endpoints come from `baseUri` alone. `{version}` in the URI is replaced by
//! the top-level `version`; any other URI parameter (`baseUriParameters`) is
//! rejected. The `protocols` list decides the endpoint protocols:
//!
//! - absent or invalid: the URI's own scheme, `https` when it has none
//! - one protocol: overrides the scheme, the URI port is kept if written
//! - both HTTP and HTTPS: one endpoint each, on each protocol's default port

mod converter;
mod parser;

pub(crate) use parser::has_raml_header;
pub use parser::RamlParser;
