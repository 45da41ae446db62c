//! Error types for the parser crate.

use std::path::PathBuf;

use crate::document::DocumentFormat;

/// Errors produced while turning a file into a mapping.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The path could not be made absolute.
    #[error("invalid path '{}': {error}", path.display())]
    InvalidPath {
        path: PathBuf,
        error: std::io::Error,
    },

    /// The file could not be read.
    #[error("failed to read file '{}': {error}", path.display())]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },

    /// The file extension does not name a supported document format.
    #[error("unsupported file format: {extension} (expected .json, .yaml, .yml, .toml)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The document is not valid in its declared format.
    #[error("invalid {format}: {message}")]
    Syntax {
        format: DocumentFormat,
        message: String,
    },

    /// The document parsed, but its top level is not a mapping.
    #[error("invalid {format}: top-level value must be a mapping, got {found}")]
    NotAMapping {
        format: DocumentFormat,
        found: &'static str,
    },

    /// A document error, annotated with the file it came from.
    #[error("{}: {error}", path.display())]
    Document {
        path: PathBuf,
        error: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn syntax(format: DocumentFormat, err: impl std::fmt::Display) -> Self {
        ParseError::Syntax {
            format,
            message: err.to_string(),
        }
    }
}

/// Convenience alias for parser results.
pub type ParseResult<T> = Result<T, ParseError>;
