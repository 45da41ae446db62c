//! The `json` format: the diff tree as a pretty-printed array.
//!
//! Each node becomes `{"key", "status", ...}` with `value`, `oldValue` and
//! `newValue`, or `children`, depending on its status. An array is used
//! instead of an object keyed by property name so sibling order survives any
//! consumer.

use gendiff_diff::{Change, DiffNode};
use gendiff_types::Value;

use crate::error::{FormatError, FormatResult};

/// Serialize `nodes` with a two-space indent.
///
/// Fails with [`FormatError::NonFiniteNumber`] if any value holds NaN or an
/// infinity.
pub fn render(nodes: &[DiffNode]) -> FormatResult<String> {
    check_finite(nodes, "")?;
    Ok(serde_json::to_string_pretty(nodes)?)
}

fn check_finite(nodes: &[DiffNode], path: &str) -> FormatResult<()> {
    for node in nodes {
        let current = join(path, &node.key);
        match &node.change {
            Change::Added { value } | Change::Removed { value } | Change::Unchanged { value } => {
                check_value(value, &current)?
            }
            Change::Updated {
                old_value,
                new_value,
            } => {
                check_value(old_value, &current)?;
                check_value(new_value, &current)?;
            }
            Change::Nested { children } => check_finite(children, &current)?,
        }
    }
    Ok(())
}

fn check_value(value: &Value, path: &str) -> FormatResult<()> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(FormatError::NonFiniteNumber {
            path: path.to_string(),
            value: *f,
        }),
        Value::Sequence(items) => items.iter().try_for_each(|item| check_value(item, path)),
        Value::Mapping(map) => map
            .iter()
            .try_for_each(|(key, item)| check_value(item, &join(path, key))),
        _ => Ok(()),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
