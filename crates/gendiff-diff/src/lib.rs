//! Diff engine for gendiff.
//!
//! Compares two configuration mappings key by key and produces an ordered
//! tree of change records that the renderers in `gendiff-format` consume.
//!
//! # Key Types
//!
//! - [`DiffNode`] / [`Change`] -- One classified difference for a single key
//! - [`Status`] -- The kind of a change, as rendered by the JSON output
//! - [`DiffStats`] -- Leaf-level counts across a whole diff tree

pub mod build;
pub mod node;

pub use build::build_diff;
pub use node::{Change, DiffNode, DiffStats, Status};
