//! Compare two configuration files and render the difference.
//!
//! This is the main entry point for embedding gendiff: it reads both
//! documents, builds the change tree and renders it in the requested format.
//!
//! ```no_run
//! let text = gendiff::gen_diff("file1.json", "file2.yml", "plain")?;
//! println!("{text}");
//! # Ok::<(), gendiff::GenDiffError>(())
//! ```

pub mod config;
pub mod error;

use std::path::Path;

use tracing::debug;

pub use config::GenDiffOptions;
pub use error::{GenDiffError, GenDiffResult};

// Re-export key types
pub use gendiff_diff::{build_diff, Change, DiffNode, DiffStats, Status};
pub use gendiff_format::{render, Format, FormatError};
pub use gendiff_parser::{parse_bytes, parse_file, DocumentFormat, ParseError};
pub use gendiff_types::{Mapping, Value};

/// Diff two files and render the result in the format named `format`.
///
/// The format name is checked before either file is read.
pub fn gen_diff(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    format: &str,
) -> GenDiffResult<String> {
    let options = GenDiffOptions::with_format_name(format)?;
    gen_diff_with(path1, path2, &options)
}

/// Diff two files using explicit options.
pub fn gen_diff_with(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    options: &GenDiffOptions,
) -> GenDiffResult<String> {
    let old = parse_file(path1)?;
    let new = parse_file(path2)?;

    let nodes = build_diff(&old, &new);
    let stats = DiffStats::collect(&nodes);
    debug!(
        added = stats.added,
        removed = stats.removed,
        updated = stats.updated,
        unchanged = stats.unchanged,
        format = %options.format,
        "diff built"
    );

    Ok(render(options.format, &nodes)?)
}
