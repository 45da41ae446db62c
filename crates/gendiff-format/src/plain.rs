//! The `plain` format: one sentence per changed property.
//!
//! Paths are dotted from the root (`common.setting6.doge.wow`). Unchanged
//! properties produce no output, and complex values are never expanded.

use gendiff_diff::{Change, DiffNode};
use gendiff_types::Value;

use crate::number::render_float;

/// Placeholder written instead of a sequence or mapping.
pub const COMPLEX_VALUE: &str = "[complex value]";

/// Render `nodes` with every path prefixed by `path` (empty at the root).
pub fn render(nodes: &[DiffNode], path: &str) -> String {
    let mut lines = Vec::new();

    for node in nodes {
        let current = if path.is_empty() {
            node.key.clone()
        } else {
            format!("{}.{}", path, node.key)
        };

        match &node.change {
            Change::Added { value } => lines.push(format!(
                "Property '{}' was added with value: {}",
                current,
                render_value(value)
            )),
            Change::Removed { .. } => lines.push(format!("Property '{}' was removed", current)),
            Change::Updated {
                old_value,
                new_value,
            } => lines.push(format!(
                "Property '{}' was updated. From {} to {}",
                current,
                render_value(old_value),
                render_value(new_value)
            )),
            Change::Unchanged { .. } => {}
            Change::Nested { children } => {
                let nested = render(children, &current);
                if !nested.is_empty() {
                    lines.push(nested);
                }
            }
        }
    }

    lines.join("\n")
}

/// Stringify a value for a plain sentence.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Sequence(_) | Value::Mapping(_) => COMPLEX_VALUE.to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => render_float(*f),
    }
}
