use gendiff_format::Format;
use serde::{Deserialize, Serialize};

use crate::error::GenDiffResult;

/// Options for a single diff run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenDiffOptions {
    /// Output format for the rendered diff.
    pub format: Format,
}

impl GenDiffOptions {
    /// Options for the named format. Unknown names are an error.
    pub fn with_format_name(name: &str) -> GenDiffResult<Self> {
        Ok(Self {
            format: name.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenDiffError;

    #[test]
    fn default_options() {
        assert_eq!(GenDiffOptions::default().format, Format::Stylish);
    }

    #[test]
    fn named_format() {
        let options = GenDiffOptions::with_format_name("plain").unwrap();
        assert_eq!(options.format, Format::Plain);
    }

    #[test]
    fn unknown_format_name() {
        let err = GenDiffOptions::with_format_name("xml").unwrap_err();
        assert!(matches!(err, GenDiffError::Format(_)));
        assert_eq!(err.to_string(), "unsupported format: xml");
    }

    #[test]
    fn deserializes_from_lowercase_name() {
        let options: GenDiffOptions = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(options.format, Format::Json);
    }
}
