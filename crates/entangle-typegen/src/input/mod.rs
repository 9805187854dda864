//! Input format parsers.
//!
//! Each parser reads a schema source and produces entity descriptors.

mod json;

pub use json::{ParseError, SchemaDocument, parse_schema, parse_schema_str};
