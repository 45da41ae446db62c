//! Read a document from disk.

use std::path::Path;

use gendiff_types::Mapping;
use tracing::debug;

use crate::convert::parse_bytes;
use crate::document::DocumentFormat;
use crate::error::{ParseError, ParseResult};

/// Read and parse the file at `path`, choosing the parser by extension.
///
/// Errors from the document itself are wrapped with the absolute path of the
/// offending file.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Mapping> {
    let path = path.as_ref();
    let abs_path = std::path::absolute(path).map_err(|error| ParseError::InvalidPath {
        path: path.to_path_buf(),
        error,
    })?;

    let format = DocumentFormat::from_path(&abs_path)?;
    let bytes = std::fs::read(&abs_path).map_err(|error| ParseError::Read {
        path: abs_path.clone(),
        error,
    })?;
    debug!(path = %abs_path.display(), %format, "read document");

    parse_bytes(&bytes, format).map_err(|error| ParseError::Document {
        path: abs_path,
        error: Box::new(error),
    })
}
