//! Header tree resolution and table rendering for `rowify`.
//!
//! The pipeline turns a sequence of nested records into one fixed-width
//! text block:
//!
//! ```text
//! records → HeaderTree::resolve → propagate → expand_header_rows
//!                                           → render_row per record → table
//! ```
//!
//! - [`tree`]: the merged, width-annotated header shape
//! - [`rows`]: expansion of the tree into one synthetic header row per depth
//! - [`render`]: per-row rendering and final table assembly
//!
//! # Examples
//!
//! ```
//! use rowify_core::{Record, RenderOptions};
//! use rowify_table::render;
//!
//! let rows = vec![
//!     Record::new().with("A", Record::new().with("x", 1).with("y", 22)),
//!     Record::new().with("A", Record::new().with("x", 333)),
//! ];
//! let table = render(&rows, &RenderOptions::new().with_delimiter(" | ")).unwrap();
//! assert_eq!(
//!     table,
//!     "|    A     |\n\
//!      |  x  | y  |\n\
//!      |  1  | 22 |\n\
//!      | 333 |    |"
//! );
//! ```

pub mod render;
pub mod rows;
pub mod tree;

pub use render::{render, render_row};
pub use rows::expand_header_rows;
pub use tree::{HeaderNode, HeaderTree};
