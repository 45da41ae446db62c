//! Build a change tree from two mappings.
//!
//! Keys are visited in ascending order, so siblings in the result are always
//! sorted. Two mappings under the same key are diffed recursively; if they
//! turn out deep-equal the key is reported unchanged rather than as an empty
//! nested block.

use std::collections::BTreeSet;

use gendiff_types::{deep_equal, Mapping, Value};

use crate::node::DiffNode;

/// Compute the diff between two mappings.
///
/// Keys present only in `new` are added, keys present only in `old` are
/// removed, and deep-equal values are unchanged. Two differing mappings
/// become a nested node; any other pair of differing values (including a
/// mapping against a scalar) is updated.
pub fn build_diff(old: &Mapping, new: &Mapping) -> Vec<DiffNode> {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    keys.into_iter()
        .map(|key| match (old.get(key), new.get(key)) {
            (None, Some(value)) => DiffNode::added(key.as_str(), value.clone()),
            (Some(value), None) => DiffNode::removed(key.as_str(), value.clone()),
            (Some(old_val), Some(new_val)) => classify(key, old_val, new_val),
            (None, None) => unreachable!("key {key:?} came from one of the two mappings"),
        })
        .collect()
}

fn classify(key: &str, old_val: &Value, new_val: &Value) -> DiffNode {
    if deep_equal(old_val, new_val) {
        return DiffNode::unchanged(key, old_val.clone());
    }

    match (old_val, new_val) {
        // Unequal mappings always yield at least one changed child.
        (Value::Mapping(old_map), Value::Mapping(new_map)) => {
            DiffNode::nested(key, build_diff(old_map, new_map))
        }
        _ => DiffNode::updated(key, old_val.clone(), new_val.clone()),
    }
}
