//! WSDL 1.1 endpoint extraction
//!
//! Every `<port>` of every `<service>` contributes the `location` of its
//! address element (`soap:address`, `soap12:address` or `http:address`).
//! Ports without an explicit port number are resolved from the scheme, and
//! an unresolvable scheme fails the extraction. Duplicate routes are dropped,
//! first occurrence wins.

mod converter;
mod parser;
mod types;

pub use parser::WsdlParser;
pub use types::*;
