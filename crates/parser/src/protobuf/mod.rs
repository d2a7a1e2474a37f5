//! Protobuf IDL recognition
//!
//! A `.proto` source qualifies when it parses and declares at least one
//! top-level element (package, import, option, message, enum, service or
//! extension). Endpoints cannot be derived from an IDL alone, so the parser
//! always reports an empty list.
//!
//! ## Example
//! ```rust,ignore
//! use specscout_parser::ProtobufParser;
//!
//! let parser = ProtobufParser::from_bytes(include_bytes!("petstore.proto"))?;
//! assert!(parser.endpoints().is_empty());
//! ```

mod parser;

pub use parser::ProtobufParser;
