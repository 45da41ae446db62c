//! Error types for the format crate.

/// Errors that can occur while selecting or running a renderer.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The requested output format name is not one of `stylish`, `plain`, `json`.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A NaN or infinite float, which JSON cannot represent.
    #[error("cannot represent {value} at '{path}' in JSON")]
    NonFiniteNumber { path: String, value: f64 },

    /// The JSON renderer could not serialize the diff tree.
    #[error("failed to format JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for format results.
pub type FormatResult<T> = Result<T, FormatError>;
