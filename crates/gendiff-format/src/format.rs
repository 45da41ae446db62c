use std::fmt;
use std::str::FromStr;

use gendiff_diff::DiffNode;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};
use crate::{json, plain, stylish};

/// A supported output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Stylish,
    Plain,
    Json,
}

impl Format {
    /// Every supported format, in the order they are documented.
    pub const ALL: [Format; 3] = [Format::Stylish, Format::Plain, Format::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Stylish => "stylish",
            Format::Plain => "plain",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    /// Names are matched exactly; anything else is rejected rather than
    /// falling back to the default.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == name)
            .ok_or_else(|| FormatError::UnsupportedFormat(name.to_string()))
    }
}

/// Render a diff tree in the given format.
pub fn render(format: Format, nodes: &[DiffNode]) -> FormatResult<String> {
    match format {
        Format::Stylish => Ok(stylish::render(nodes, 0)),
        Format::Plain => Ok(plain::render(nodes, "")),
        Format::Json => json::render(nodes),
    }
}
