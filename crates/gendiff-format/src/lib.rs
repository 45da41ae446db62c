//! Output renderers for gendiff.
//!
//! Each renderer turns the change tree built by `gendiff-diff` into text:
//!
//! - [`stylish`] -- Indented brace blocks with `+`/`-` markers (the default)
//! - [`plain`] -- One sentence per changed property
//! - [`json`] -- The tree as a pretty-printed array of keyed objects
//!
//! [`Format`] names a renderer and [`render`] dispatches to it.

pub mod error;
pub mod format;
pub mod json;
mod number;
pub mod plain;
pub mod stylish;

pub use error::{FormatError, FormatResult};
pub use format::{render, Format};
