//! # rowify
//!
//! Aligned, nested-header text tables for monospace terminal output.
//!
//! Feed `rowify` a sequence of heterogeneous, arbitrarily nested key/value
//! records and it produces one fixed-width text block: one header row per
//! nesting depth (shallowest on top), one data row per record, every cell
//! centered in a column wide enough for everything that appears in it.
//!
//! The renderer never interprets field values (numbers, percentages and
//! dates are opaque strings) and it neither sorts nor filters rows. It is
//! pure and synchronous: records in, one `String` out.
//!
//! # Example
//!
//! ```
//! use rowify::prelude::*;
//!
//! let rows = vec![
//!     Record::new().with("A", Record::new().with("x", 1).with("y", 22)),
//!     Record::new().with("A", Record::new().with("x", 333)),
//! ];
//!
//! let table = render(&rows, &RenderOptions::new().with_delimiter(" | ")).unwrap();
//! assert_eq!(
//!     table,
//!     "|    A     |\n\
//!      |  x  | y  |\n\
//!      |  1  | 22 |\n\
//!      | 333 |    |"
//! );
//! ```
//!
//! # Crates
//!
//! - [`core`]: records, options, errors
//! - [`text`]: width-bounded cell primitives, ANSI paint, glyphs
//! - [`table`]: header tree, header rows, rendering

pub use rowify_core as core;
pub use rowify_table as table;
pub use rowify_text as text;

pub use rowify_core::{Border, Error, Record, RenderOptions, Result, Value};
pub use rowify_table::render;

pub mod prelude {
    pub use rowify_core::{Border, Error, Record, RenderOptions, Value};
    pub use rowify_table::{expand_header_rows, render, render_row, HeaderNode, HeaderTree};
    pub use rowify_text::{center, left, right};
}
