//! Width-bounded text cell primitives and terminal glyphs for `rowify`.
//!
//! Everything in this crate measures text in terminal display columns with
//! proper Unicode support (grapheme clustering, wide CJK characters,
//! zero-width marks), so cells stay aligned on a monospace terminal:
//!
//! - [`measure`]: display-width calculation
//! - [`align`]: pad/truncate/center primitives that always return exactly
//!   the requested width
//! - [`paint`]: a small immutable builder for ANSI SGR color codes
//! - [`glyph`]: box-drawing and symbol constants
//!
//! # Examples
//!
//! ```
//! use rowify_text::{center, display_width, left, right};
//!
//! assert_eq!(center(5, "ab"), "  ab ");
//! assert_eq!(left(4, "abcdef"), "abcd");
//! assert_eq!(right(4, "ab"), "  ab");
//! assert_eq!(display_width("日本語"), 6);
//! ```

pub mod align;
pub mod glyph;
pub mod measure;
pub mod paint;

pub use align::{center, center_with, left, left_with, right, right_with};
pub use measure::{display_width, grapheme_width};
pub use paint::{Color, Ground, Paint, Shade, Tint};
