//! The merged header shape: a width-annotated tree of columns.
//!
//! Built in two clearly separated passes so the width computation has an
//! easy fixed point:
//!
//! 1. [`HeaderTree::resolve`] merges the key structure of every record into
//!    one tree and seeds each leaf with the widest value seen at that path.
//! 2. [`HeaderTree::propagate`] derives every group's rendered span from its
//!    children and reconciles it against the group's own label width.

use indexmap::IndexMap;
use rowify_core::{Record, Value};
use rowify_text::display_width;

/// One node of the header tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderNode {
    /// A single renderable column with a fixed display width.
    Leaf {
        /// Display columns this cell occupies.
        width: usize,
    },
    /// A labeled cluster of child columns, rendered as a header spanning
    /// their combined width.
    Group {
        /// Child columns in first-appearance order.
        children: IndexMap<String, HeaderNode>,
        /// Rendered span in display columns; 0 until propagation.
        width: usize,
    },
}

impl HeaderNode {
    fn group() -> Self {
        Self::Group {
            children: IndexMap::new(),
            width: 0,
        }
    }

    /// The node's rendered width (leaf width, or propagated group span).
    pub fn width(&self) -> usize {
        match self {
            Self::Leaf { width } | Self::Group { width, .. } => *width,
        }
    }
}

/// The merged, width-annotated shape describing all columns across all
/// records. The root group is nameless; its direct children are the
/// top-level columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTree {
    children: IndexMap<String, HeaderNode>,
    show_headers: bool,
    width: usize,
}

impl HeaderTree {
    /// Merges the key structure of every record into one header tree.
    ///
    /// Keys are ordered by first appearance across the whole sequence. A
    /// leaf's width starts at its name's width when `show_headers` (the
    /// label must fit) or 0 otherwise, and grows to the widest value seen.
    /// The first record to establish whether a path is scalar or nested
    /// wins; later records of the other kind are ignored at that path and
    /// render blank.
    pub fn resolve(records: &[Record], show_headers: bool) -> Self {
        let mut children = IndexMap::new();
        for record in records {
            merge(&mut children, record, show_headers);
        }
        Self {
            children,
            show_headers,
            width: 0,
        }
    }

    /// Returns true when no record contributed any column.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether leaf widths account for field names and header rows are
    /// rendered.
    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    /// Top-level columns in first-appearance order.
    pub fn children(&self) -> &IndexMap<String, HeaderNode> {
        &self.children
    }

    /// Total content width (excluding borders); 0 until
    /// [`propagate`](Self::propagate) has run.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Derives every group's rendered span and returns the total content
    /// width.
    ///
    /// Post-order: a group's span is the sum of its children's spans plus
    /// one delimiter between each adjacent pair, using the delimiter for the
    /// group's depth (the last delimiter repeats once the list runs out).
    /// When headers are shown and a group's label is wider than that span,
    /// the whole shortfall is pushed onto the group's **last** descendant
    /// leaf rather than redistributed: a long label widens only the
    /// rightmost column beneath it. Idempotent: propagating an already
    /// propagated tree changes nothing.
    ///
    /// # Panics
    ///
    /// Panics when `delimiters` is empty; [`render`](crate::render::render)
    /// validates this up front.
    pub fn propagate(&mut self, delimiters: &[String]) -> usize {
        let delimiter = display_width(&delimiters[0]);
        let rest = advance(delimiters);
        let mut total = 0;
        for (index, (name, child)) in self.children.iter_mut().enumerate() {
            if index > 0 {
                total += delimiter;
            }
            total += propagate_node(child, name, rest, self.show_headers);
        }
        self.width = total;
        total
    }
}

/// Advances the delimiter list one nesting level, reusing the last entry.
pub(crate) fn advance(delimiters: &[String]) -> &[String] {
    if delimiters.len() > 1 {
        &delimiters[1..]
    } else {
        delimiters
    }
}

fn merge(children: &mut IndexMap<String, HeaderNode>, record: &Record, show_headers: bool) {
    for (name, value) in record.iter() {
        match value {
            Value::Nested(nested) => {
                let node = children
                    .entry(name.to_string())
                    .or_insert_with(HeaderNode::group);
                // A path first seen as a scalar stays a leaf.
                if let HeaderNode::Group { children, .. } = node {
                    merge(children, nested, show_headers);
                }
            }
            Value::Scalar(text) => {
                let seed = if show_headers { display_width(name) } else { 0 };
                let node = children
                    .entry(name.to_string())
                    .or_insert(HeaderNode::Leaf { width: seed });
                // A path first seen as nested stays a group.
                if let HeaderNode::Leaf { width } = node {
                    *width = (*width).max(display_width(text));
                }
            }
        }
    }
}

fn propagate_node(
    node: &mut HeaderNode,
    name: &str,
    delimiters: &[String],
    labeled: bool,
) -> usize {
    match node {
        HeaderNode::Leaf { width } => *width,
        HeaderNode::Group { children, width } => {
            let delimiter = display_width(&delimiters[0]);
            let rest = advance(delimiters);
            let mut span = 0;
            for (index, (child_name, child)) in children.iter_mut().enumerate() {
                if index > 0 {
                    span += delimiter;
                }
                span += propagate_node(child, child_name, rest, labeled);
            }
            if labeled {
                let label = display_width(name);
                if label > span {
                    grow_last(children, label - span);
                    span = label;
                }
            }
            *width = span;
            span
        }
    }
}

/// Adds `overflow` columns to the last descendant leaf, widening every group
/// span along the way so the stored widths stay consistent.
fn grow_last(children: &mut IndexMap<String, HeaderNode>, overflow: usize) {
    let last = children.len().wrapping_sub(1);
    let Some((_, node)) = children.get_index_mut(last) else {
        return;
    };
    match node {
        HeaderNode::Leaf { width } => *width += overflow,
        HeaderNode::Group { children, width } => {
            grow_last(children, overflow);
            *width += overflow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn delims(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    fn leaf_width(tree: &HeaderTree, path: &[&str]) -> usize {
        let mut children = tree.children();
        for name in &path[..path.len() - 1] {
            match &children[*name] {
                HeaderNode::Group { children: next, .. } => children = next,
                HeaderNode::Leaf { .. } => panic!("expected group at {name}"),
            }
        }
        children[*path.last().unwrap()].width()
    }

    #[test]
    fn test_resolve_merges_first_appearance_order() {
        let records = vec![
            Record::new().with("b", 1),
            Record::new().with("a", 2).with("b", 3),
            Record::new().with("c", 4),
        ];
        let tree = HeaderTree::resolve(&records, true);
        let keys: Vec<_> = tree.children().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_resolve_seeds_widths_from_names_and_values() {
        let records = vec![
            Record::new().with("A", Record::new().with("x", 1).with("y", 22)),
            Record::new().with("A", Record::new().with("x", 333)),
        ];
        let tree = HeaderTree::resolve(&records, true);
        assert_eq!(leaf_width(&tree, &["A", "x"]), 3);
        assert_eq!(leaf_width(&tree, &["A", "y"]), 2);

        let bare = HeaderTree::resolve(&records, false);
        assert_eq!(leaf_width(&bare, &["A", "x"]), 3);
        assert_eq!(leaf_width(&bare, &["A", "y"]), 2);
    }

    #[test]
    fn test_resolve_name_wider_than_values() {
        let records = vec![Record::new().with("status", "ok")];
        let tree = HeaderTree::resolve(&records, true);
        assert_eq!(leaf_width(&tree, &["status"]), 6);

        let bare = HeaderTree::resolve(&records, false);
        assert_eq!(leaf_width(&bare, &["status"]), 2);
    }

    #[test]
    fn test_resolve_first_kind_wins() {
        let records = vec![
            Record::new().with("a", Record::new().with("x", 1)),
            Record::new().with("a", "scalar now"),
            Record::new().with("b", "scalar first"),
            Record::new().with("b", Record::new().with("y", 2)),
        ];
        let tree = HeaderTree::resolve(&records, true);
        assert!(matches!(tree.children()["a"], HeaderNode::Group { .. }));
        assert!(matches!(tree.children()["b"], HeaderNode::Leaf { .. }));
        assert_eq!(leaf_width(&tree, &["b"]), 12);
    }

    #[test]
    fn test_resolve_empty() {
        assert!(HeaderTree::resolve(&[], true).is_empty());
        assert!(HeaderTree::resolve(&[Record::new()], true).is_empty());
    }

    #[test]
    fn test_propagate_sums_children_and_delimiters() {
        let records = vec![
            Record::new().with("A", Record::new().with("x", 1).with("y", 22)),
            Record::new().with("A", Record::new().with("x", 333)),
        ];
        let mut tree = HeaderTree::resolve(&records, true);
        // x(3) + " | "(3) + y(2)
        assert_eq!(tree.propagate(&delims(&[" | "])), 8);
        assert_eq!(tree.children()["A"].width(), 8);
    }

    #[test]
    fn test_propagate_depth_delimiters() {
        let records = vec![Record::new()
            .with("G", Record::new().with("a", 1).with("b", 2))
            .with("H", Record::new().with("c", 3))];
        let mut tree = HeaderTree::resolve(&records, true);
        // G spans a(1) + " : "(3) + b(1) = 5; root: 5 + " | "(3) + 1
        assert_eq!(tree.propagate(&delims(&[" | ", " : "])), 9);
        assert_eq!(tree.children()["G"].width(), 5);
        assert_eq!(tree.children()["H"].width(), 1);
    }

    #[test]
    fn test_propagate_reuses_last_delimiter() {
        let records = vec![Record::new().with(
            "G",
            Record::new().with(
                "M",
                Record::new().with("x", 1).with("y", 2),
            ),
        )];
        let mut tree = HeaderTree::resolve(&records, true);
        // x and y sit at depth 2 and still use " : " once the list runs out.
        assert_eq!(tree.propagate(&delims(&[" | ", " : "])), 5);
    }

    #[test]
    fn test_propagate_label_overflow_grows_last_leaf() {
        let records = vec![Record::new().with("LONGNAME", Record::new().with("x", 1))];
        let mut tree = HeaderTree::resolve(&records, true);
        assert_eq!(tree.propagate(&delims(&[" | "])), 8);
        assert_eq!(leaf_width(&tree, &["LONGNAME", "x"]), 8);
    }

    #[test]
    fn test_propagate_overflow_recurses_into_last_group() {
        let records = vec![Record::new().with(
            "PPPPPP",
            Record::new().with("Q", Record::new().with("x", 1)),
        )];
        let mut tree = HeaderTree::resolve(&records, true);
        assert_eq!(tree.propagate(&delims(&[" | "])), 6);
        assert_eq!(leaf_width(&tree, &["PPPPPP", "Q", "x"]), 6);
        assert_eq!(tree.children()["PPPPPP"].width(), 6);
    }

    #[test]
    fn test_propagate_overflow_lands_on_last_of_many() {
        let records = vec![Record::new().with(
            "WIDE LABEL",
            Record::new().with("a", 1).with("b", 2),
        )];
        let mut tree = HeaderTree::resolve(&records, true);
        // a(1) + "|"(1) + b(1) = 3; label is 10, so b absorbs all 7 extra.
        assert_eq!(tree.propagate(&delims(&["|"])), 10);
        assert_eq!(leaf_width(&tree, &["WIDE LABEL", "a"]), 1);
        assert_eq!(leaf_width(&tree, &["WIDE LABEL", "b"]), 8);
    }

    #[test]
    fn test_propagate_skips_labels_when_headers_hidden() {
        let records = vec![Record::new().with("LONGNAME", Record::new().with("x", 1))];
        let mut tree = HeaderTree::resolve(&records, false);
        assert_eq!(tree.propagate(&delims(&[" | "])), 1);
        assert_eq!(leaf_width(&tree, &["LONGNAME", "x"]), 1);
    }

    #[test]
    fn test_propagate_is_idempotent() {
        let records = vec![
            Record::new()
                .with("LONGNAME", Record::new().with("x", 1))
                .with("B", Record::new().with("y", 22).with("z", 3)),
            Record::new().with("B", Record::new().with("y", 4)),
        ];
        let mut tree = HeaderTree::resolve(&records, true);
        let delimiters = delims(&[" | ", " : "]);
        let first = tree.propagate(&delimiters);
        let snapshot = tree.clone();
        let second = tree.propagate(&delimiters);
        assert_eq!(first, second);
        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_empty_group_spans_its_label() {
        let records = vec![Record::new().with("empty", Record::new())];
        let mut tree = HeaderTree::resolve(&records, true);
        assert_eq!(tree.propagate(&delims(&[" "])), 5);

        let mut bare = HeaderTree::resolve(&records, false);
        assert_eq!(bare.propagate(&delims(&[" "])), 0);
    }
}
