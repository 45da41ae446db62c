//! Foundation types for gendiff.
//!
//! Every document gendiff compares is reduced to a [`Mapping`] of string keys
//! to [`Value`]s. The remaining crates depend only on this representation.
//!
//! # Key Types
//!
//! - [`Value`] -- Closed set of dynamically-typed configuration values
//! - [`Mapping`] -- Key-sorted map from string key to [`Value`]
//! - [`deep_equal`] -- Structural equality used by the diff builder

pub mod value;

pub use value::{deep_equal, mappings_equal, Mapping, Value};
