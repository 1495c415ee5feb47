//! Display-width measurement in terminal columns.
//!
//! Widths are counted per grapheme cluster: ASCII is 1 column, CJK and most
//! emoji are 2, combining marks and other zero-width codepoints are 0. All
//! alignment in the table renderer is based on these widths rather than
//! `char` counts.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Measure the display width of a string in terminal columns.
///
/// # Example
///
/// ```
/// use rowify_text::measure::display_width;
///
/// assert_eq!(display_width("Hello"), 5);
/// assert_eq!(display_width("日本語"), 6); // 3 chars × 2 columns
/// assert_eq!(display_width("Hi世界"), 6); // 2 + 2×2
/// ```
pub fn display_width(text: &str) -> usize {
    // Fast path for ASCII-only text
    if text.is_ascii() {
        return text.chars().filter(|c| !c.is_ascii_control()).count();
    }

    text.graphemes(true).map(grapheme_width).sum()
}

/// Calculate the display width of a single grapheme cluster.
///
/// For multi-codepoint graphemes the widest component character wins, which
/// handles combining sequences correctly (the base character determines the
/// width).
///
/// # Example
///
/// ```
/// use rowify_text::measure::grapheme_width;
///
/// assert_eq!(grapheme_width("a"), 1);
/// assert_eq!(grapheme_width("中"), 2);
/// assert_eq!(grapheme_width("e\u{301}"), 1); // e + combining acute
/// ```
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }

    if grapheme == "\n" || grapheme == "\r" || grapheme == "\r\n" {
        return 0;
    }

    grapheme
        .chars()
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(0)
}
