//! Expansion of the header tree into one synthetic row per nesting depth.
//!
//! A pure fold over the immutable tree: the deepest row mirrors the full
//! shape with every leaf replaced by its own name, and each collapse step
//! replaces the deepest remaining group level with the group's name while
//! dropping plain leaf entries. The collapse sequence is reversed before
//! emission, so a three-level header renders as
//! `[top-category row, mid-category row, leaf-name row]`.

use indexmap::IndexMap;
use rowify_core::{Record, Value};

use crate::tree::{HeaderNode, HeaderTree};

/// Expands the tree into header rows ordered shallowest to deepest.
///
/// The row count equals the maximum nesting depth across all records; rows
/// shallower than a given column leave that column blank when rendered.
pub fn expand_header_rows(tree: &HeaderTree) -> Vec<Record> {
    let mut rows = Vec::new();
    let mut current = deepest(tree.children());
    while !current.is_empty() {
        let next = collapse(&current);
        rows.push(current);
        current = next;
    }
    rows.reverse();
    rows
}

/// The synthetic record mirroring the full tree shape, with every leaf
/// holding its own name.
fn deepest(children: &IndexMap<String, HeaderNode>) -> Record {
    children
        .iter()
        .map(|(name, node)| {
            let value = match node {
                HeaderNode::Leaf { .. } => Value::Scalar(name.clone()),
                HeaderNode::Group { children, .. } => Value::Nested(deepest(children)),
            };
            (name.clone(), value)
        })
        .collect()
}

/// One collapse step: groups with no nested groups left become their own
/// name; scalar entries are dropped so shallower rows leave those columns
/// blank. Returns an empty record once nothing is left to collapse.
fn collapse(row: &Record) -> Record {
    row.iter()
        .filter_map(|(name, value)| {
            let nested = value.as_record()?;
            let replacement = if nested.iter().any(|(_, child)| child.is_nested()) {
                Value::Nested(collapse(nested))
            } else {
                Value::Scalar(name.to_string())
            };
            Some((name.to_string(), replacement))
        })
        .collect()
}
