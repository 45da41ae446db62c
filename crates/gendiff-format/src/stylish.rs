//! The `stylish` format: indented brace blocks with `+`/`-` markers.
//!
//! ```text
//! {
//!     common: {
//!       + follow: false
//!         setting1: Value 1
//!     }
//!   - timeout: 50
//!   + timeout: 20
//! }
//! ```
//!
//! Every depth adds [`INDENT_UNIT`] columns. A line at depth `d` reserves two
//! columns at `d * INDENT_UNIT + 2` for the marker and its space, so keys line
//! up whether or not a marker is present.

use gendiff_diff::{Change, DiffNode};
use gendiff_types::Value;

use crate::number::render_float;

/// Columns added per nesting level.
pub const INDENT_UNIT: usize = 4;

/// Render `nodes` as a brace block whose closing brace sits at `depth`.
pub fn render(nodes: &[DiffNode], depth: usize) -> String {
    if nodes.is_empty() {
        return "{}".to_string();
    }

    let mut lines = vec!["{".to_string()];
    for node in nodes {
        push_node(&mut lines, node, depth);
    }
    lines.push(format!("{}}}", indent(depth * INDENT_UNIT)));
    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &DiffNode, depth: usize) {
    let key = &node.key;
    match &node.change {
        Change::Added { value } => lines.push(line(depth, '+', key, value)),
        Change::Removed { value } => lines.push(line(depth, '-', key, value)),
        Change::Unchanged { value } => lines.push(line(depth, ' ', key, value)),
        Change::Updated {
            old_value,
            new_value,
        } => {
            lines.push(line(depth, '-', key, old_value));
            lines.push(line(depth, '+', key, new_value));
        }
        Change::Nested { children } => lines.push(format!(
            "{}  {}: {}",
            marker_indent(depth),
            key,
            render(children, depth + 1)
        )),
    }
}

fn line(depth: usize, marker: char, key: &str, value: &Value) -> String {
    format!(
        "{}{} {}: {}",
        marker_indent(depth),
        marker,
        key,
        render_value(value, depth + 1)
    )
}

/// Render a single value whose enclosing block closes at `depth`.
///
/// Non-empty mappings expand into a brace block with their keys at
/// `depth + 1`; everything else renders on one line.
pub fn render_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            let mut lines = vec!["{".to_string()];
            for (key, item) in map {
                lines.push(format!(
                    "{}{}: {}",
                    indent((depth + 1) * INDENT_UNIT),
                    key,
                    render_value(item, depth + 1)
                ));
            }
            lines.push(format!("{}}}", indent(depth * INDENT_UNIT)));
            lines.join("\n")
        }
        other => render_inline(other),
    }
}

fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => render_float(*f),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(render_inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) if map.is_empty() => "{}".to_string(),
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, render_inline(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn marker_indent(depth: usize) -> String {
    indent(depth * INDENT_UNIT + 2)
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(v: serde_json::Value) -> Value {
        Value::from(v)
    }

    #[test]
    fn single_added_node() {
        let nodes = vec![DiffNode::added("timeout", Value::Integer(50))];
        assert_eq!(render(&nodes, 0), "{\n  + timeout: 50\n}");
    }

    #[test]
    fn added_and_removed() {
        let nodes = vec![
            DiffNode::removed("debug", Value::Bool(false)),
            DiffNode::added("verbose", Value::Bool(true)),
        ];
        assert_eq!(render(&nodes, 0), "{\n  - debug: false\n  + verbose: true\n}");
    }

    #[test]
    fn updated_emits_two_lines() {
        let nodes = vec![DiffNode::updated(
            "timeout",
            Value::Integer(50),
            Value::Integer(20),
        )];
        assert_eq!(render(&nodes, 0), "{\n  - timeout: 50\n  + timeout: 20\n}");
    }

    #[test]
    fn unchanged_keeps_keys_aligned() {
        let nodes = vec![
            DiffNode::unchanged("host", Value::from("hexlet.io")),
            DiffNode::added("port", Value::Integer(80)),
        ];
        assert_eq!(render(&nodes, 0), "{\n    host: hexlet.io\n  + port: 80\n}");
    }

    #[test]
    fn nested_structure() {
        let nodes = vec![DiffNode::nested(
            "common",
            vec![DiffNode::added("follow", Value::Bool(true))],
        )];
        assert_eq!(
            render(&nodes, 0),
            "{\n    common: {\n      + follow: true\n    }\n}"
        );
    }

    #[test]
    fn empty_diff() {
        assert_eq!(render(&[], 0), "{}");
    }

    #[test]
    fn block_at_depth_closes_at_that_indent() {
        let nodes = vec![DiffNode::added("key", Value::from("value"))];
        assert_eq!(render(&nodes, 1), "{\n      + key: value\n    }");
    }

    #[test]
    fn mapping_values_expand_with_sorted_keys() {
        let nodes = vec![DiffNode::removed(
            "group2",
            value(json!({"deep": {"id": 45}, "abc": 12345})),
        )];
        let expected = "\
{
  - group2: {
        abc: 12345
        deep: {
            id: 45
        }
    }
}";
        assert_eq!(render(&nodes, 0), expected);
    }

    #[test]
    fn empty_string_leaves_trailing_space() {
        let nodes = vec![DiffNode::updated(
            "wow",
            Value::from(""),
            Value::from("so much"),
        )];
        assert_eq!(render(&nodes, 0), "{\n  - wow: \n  + wow: so much\n}");
    }

    #[test]
    fn scalar_values() {
        assert_eq!(render_value(&Value::from("hello"), 0), "hello");
        assert_eq!(render_value(&Value::Integer(42), 0), "42");
        assert_eq!(render_value(&Value::Float(1.5), 0), "1.5");
        assert_eq!(render_value(&Value::Bool(true), 0), "true");
        assert_eq!(render_value(&Value::Null, 0), "null");
        assert_eq!(render_value(&Value::Float(1e300), 0), "1e300");
        assert_eq!(render_value(&Value::Float(f64::NAN), 0), "NaN");
    }

    #[test]
    fn empty_mapping_value() {
        assert_eq!(render_value(&value(json!({})), 0), "{}");
    }

    #[test]
    fn non_empty_mapping_value() {
        assert_eq!(render_value(&value(json!({"key": "value"})), 0), "{\n    key: value\n}");
        assert_eq!(
            render_value(&value(json!({"key": "value"})), 1),
            "{\n        key: value\n    }"
        );
    }

    #[test]
    fn sequences_render_inline() {
        assert_eq!(
            render_value(&value(json!([1, "two", null, [true], {"k": "v"}, {}])), 0),
            "[1, two, null, [true], {k: v}, {}]"
        );
        assert_eq!(render_value(&value(json!([])), 0), "[]");
    }
}
