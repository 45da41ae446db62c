//! Document parsers for gendiff.
//!
//! Turns JSON, YAML and TOML files into the [`Mapping`](gendiff_types::Mapping)
//! the diff builder compares. Parse failures carry a readable message and,
//! when read from disk, the offending path.
//!
//! # Key Types
//!
//! - [`DocumentFormat`] -- Input format, resolved from the file extension
//! - [`parse_file`] / [`parse_bytes`] -- Entry points
//! - [`ParseError`] -- Everything that can go wrong before a diff is built

pub mod convert;
pub mod document;
pub mod error;
pub mod file;

pub use convert::parse_bytes;
pub use document::DocumentFormat;
pub use error::{ParseError, ParseResult};
pub use file::parse_file;
