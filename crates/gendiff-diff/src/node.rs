//! Change records produced by the diff builder.

use std::fmt;

use gendiff_types::Value;
use serde::{Deserialize, Serialize};

/// One classified difference for a single mapping key.
///
/// Serializes as `{"key": ..., "status": ..., <payload fields>}`, which is
/// the object shape of the JSON output format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffNode {
    /// The mapping key this node describes. Unique among its siblings.
    pub key: String,
    /// What happened to the key.
    #[serde(flatten)]
    pub change: Change,
}

/// The payload of a [`DiffNode`], one variant per change kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Change {
    /// The key exists only in the second document.
    Added { value: Value },
    /// The key exists only in the first document.
    Removed { value: Value },
    /// Both documents hold deep-equal values.
    Unchanged { value: Value },
    /// Both documents hold the key with different values that are not both mappings.
    Updated {
        #[serde(rename = "oldValue")]
        old_value: Value,
        #[serde(rename = "newValue")]
        new_value: Value,
    },
    /// Both values are mappings that differ; `children` is their sub-diff.
    Nested { children: Vec<DiffNode> },
}

impl DiffNode {
    pub fn added(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, Change::Added { value })
    }

    pub fn removed(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, Change::Removed { value })
    }

    pub fn unchanged(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, Change::Unchanged { value })
    }

    pub fn updated(key: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self::new(
            key,
            Change::Updated {
                old_value,
                new_value,
            },
        )
    }

    pub fn nested(key: impl Into<String>, children: Vec<DiffNode>) -> Self {
        Self::new(key, Change::Nested { children })
    }

    fn new(key: impl Into<String>, change: Change) -> Self {
        Self {
            key: key.into(),
            change,
        }
    }

    /// The kind of change this node records.
    pub fn status(&self) -> Status {
        match self.change {
            Change::Added { .. } => Status::Added,
            Change::Removed { .. } => Status::Removed,
            Change::Unchanged { .. } => Status::Unchanged,
            Change::Updated { .. } => Status::Updated,
            Change::Nested { .. } => Status::Nested,
        }
    }

    /// Child nodes of a nested change; empty for every other kind.
    pub fn children(&self) -> &[DiffNode] {
        match &self.change {
            Change::Nested { children } => children.as_slice(),
            _ => &[],
        }
    }
}

/// The kind of a [`Change`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Added,
    Removed,
    Unchanged,
    Updated,
    Nested,
}

impl Status {
    /// The lowercase name used in the JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Added => "added",
            Status::Removed => "removed",
            Status::Unchanged => "unchanged",
            Status::Updated => "updated",
            Status::Nested => "nested",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf-level change counts for a diff tree. Nested nodes are descended into,
/// not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Count every leaf in `nodes`, recursively.
    pub fn collect(nodes: &[DiffNode]) -> Self {
        let mut stats = Self::default();
        stats.visit(nodes);
        stats
    }

    fn visit(&mut self, nodes: &[DiffNode]) {
        for node in nodes {
            match &node.change {
                Change::Added { .. } => self.added += 1,
                Change::Removed { .. } => self.removed += 1,
                Change::Updated { .. } => self.updated += 1,
                Change::Unchanged { .. } => self.unchanged += 1,
                Change::Nested { children } => self.visit(children),
            }
        }
    }

    /// Number of leaves that differ between the two documents.
    pub fn changes(&self) -> usize {
        self.added + self.removed + self.updated
    }

    /// Returns `true` if the two documents are deep-equal.
    pub fn is_identical(&self) -> bool {
        self.changes() == 0
    }
}
