//! AsyncAPI endpoint extraction
//!
//! AsyncAPI documents are kept as a generic mapping. Each entry of `servers`
//! yields one endpoint built from `protocol`, `url` (or the AsyncAPI 3
//! `host` + `pathname` pair) and variable defaults; `bindings` is copied
//! verbatim into the endpoint details.
//!
//! Unlike OpenAPI 3, enum values are never expanded and a missing port stays
//! 0. The order of the returned endpoints follows the `servers` mapping and is
//! **unspecified**: callers must compare results as sets.

mod converter;
mod parser;

pub use parser::AsyncApiParser;
