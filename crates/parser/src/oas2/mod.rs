//! Swagger / OpenAPI 2.0 endpoint extraction
//!
//! ## Decoding
//! The document is decoded as a generic JSON/YAML mapping, every top-level key
//! is lower-cased (authoring tools are inconsistent about `basePath` vs
//! `basepath`), and only then is the mapping decoded into [`Swagger`].
//!
//! ## Endpoints
//! `host` is split into hostname and port (443 when absent or not numeric) and
//! one endpoint is produced per entry of `schemes`, in declaration order.
//!
//! ## Usage
//! ```rust,ignore
//! use specscout_parser::oas2::Oas2Parser;
//!
//! let parser = Oas2Parser::from_bytes(include_bytes!("petstore-swagger.json"))?;
//! let endpoints = parser.endpoints()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::Oas2Parser;
pub use types::*;
