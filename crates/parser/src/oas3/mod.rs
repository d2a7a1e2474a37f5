//! OpenAPI 3.x endpoint extraction
//!
//! Every entry of `servers` yields one or more endpoints:
//!
//! 1. `{name}` placeholders are substituted with each variable's `default` to
//!    build the default URL. A referenced variable without a default aborts
//!    the whole extraction.
//! 2. Variables with an `enum` fan out across every enum value (a cartesian
//!    product when several variables have enums).
//! 3. Each concrete URL must carry a scheme and a host. A missing port is
//!    resolved from the scheme through the injected port table and left at 0
//!    when the scheme is unknown.
//! 4. The endpoint built from the default URL is moved to the front of that
//!    server's list.
//!
//! A document without any `servers` entry is an extraction error.
//!
//! ## Usage
//! ```rust,ignore
//! use specscout_common::ServicePortTable;
//! use specscout_parser::oas3::Oas3Parser;
//!
//! let parser = Oas3Parser::from_bytes(include_bytes!("petstore-openapi3.json"))?;
//! let endpoints = parser.endpoints(&ServicePortTable::well_known())?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::Oas3Parser;
pub use types::*;
