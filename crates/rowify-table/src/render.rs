//! Per-row rendering and final table assembly.
//!
//! Every cell is centered in its resolved width; header labels and data
//! values follow the same policy. Missing keys render blank without
//! disturbing the column layout.

use rowify_core::{Record, RenderOptions, Result, Value};
use rowify_text::center;
use smallvec::SmallVec;
use tracing::trace;

use crate::rows::expand_header_rows;
use crate::tree::{advance, HeaderNode, HeaderTree};

/// Renders a record sequence as one aligned text block.
///
/// Resolves the merged header shape, propagates widths, prepends one header
/// row per nesting depth (unless disabled), renders every record, frames
/// each line with the border and joins with newlines. Empty input, or input
/// whose merged header shape is empty, renders as the empty string.
///
/// # Errors
///
/// Returns [`Error::EmptyDelimiters`](rowify_core::Error::EmptyDelimiters)
/// when the options carry no delimiter.
///
/// # Examples
///
/// ```
/// use rowify_core::{Record, RenderOptions};
/// use rowify_table::render;
///
/// let rows = vec![
///     Record::new().with("name", "brie").with("kind", "soft"),
///     Record::new().with("name", "edam"),
/// ];
/// let table = render(&rows, &RenderOptions::new().with_delimiter(" | ")).unwrap();
/// assert_eq!(
///     table,
///     "| name | kind |\n\
///      | brie | soft |\n\
///      | edam |      |"
/// );
/// ```
pub fn render(records: &[Record], options: &RenderOptions) -> Result<String> {
    options.validate()?;

    let mut tree = HeaderTree::resolve(records, options.show_headers);
    if tree.is_empty() {
        return Ok(String::new());
    }
    let width = tree.propagate(&options.delimiters);
    trace!(records = records.len(), width, "rendering table");

    let border = options.effective_border();
    let header_rows = if options.show_headers {
        expand_header_rows(&tree)
    } else {
        Vec::new()
    };

    let lines: Vec<String> = header_rows
        .iter()
        .chain(records)
        .map(|record| {
            let mut line = String::with_capacity(width + border.left.len() + border.right.len());
            line.push_str(&border.left);
            line.push_str(&render_row(&tree, record, &options.delimiters));
            line.push_str(&border.right);
            line
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Renders one record against a propagated header tree.
///
/// The returned string's display width equals the tree's total content
/// width regardless of which keys the record carries.
///
/// # Panics
///
/// Panics when `delimiters` is empty; [`render`] validates this up front.
pub fn render_row(tree: &HeaderTree, record: &Record, delimiters: &[String]) -> String {
    let segments: SmallVec<[String; 8]> = tree
        .children()
        .iter()
        .map(|(name, node)| {
            render_node(node, record.get(name), advance(delimiters), tree.show_headers())
        })
        .collect();
    segments.join(delimiters[0].as_str())
}

fn render_node(
    node: &HeaderNode,
    value: Option<&Value>,
    delimiters: &[String],
    labeled: bool,
) -> String {
    match node {
        HeaderNode::Leaf { width } => {
            // A nested record where other rows had a scalar renders blank.
            let text = value.and_then(Value::as_scalar).unwrap_or("");
            center(*width, text)
        }
        HeaderNode::Group { children, width } => {
            if labeled {
                // Header-row labels arrive as scalars at group positions and
                // span the whole group.
                if let Some(Value::Scalar(label)) = value {
                    return center(*width, label);
                }
            }
            // A childless group still spans its label.
            if children.is_empty() {
                return center(*width, "");
            }
            let nested = value.and_then(Value::as_record);
            let segments: SmallVec<[String; 8]> = children
                .iter()
                .map(|(name, child)| {
                    let child_value = nested.and_then(|record| record.get(name));
                    render_node(child, child_value, advance(delimiters), labeled)
                })
                .collect();
            segments.join(delimiters[0].as_str())
        }
    }
}
