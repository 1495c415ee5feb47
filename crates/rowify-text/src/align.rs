//! Pad/truncate/center primitives for fixed-width cells.
//!
//! All three primitives return a string of exactly the requested display
//! width: values too long are truncated left-anchored (no ellipsis), values
//! too short are padded. [`center`] alternates its padding, appending when
//! the current width is odd and prepending when even, so a centered value
//! drifts toward the left half of the cell as padding accumulates. Header
//! labels rely on that tie-break to line up with their data cells.

use crate::measure::{display_width, grapheme_width};
use unicode_segmentation::UnicodeSegmentation;

/// Pads or truncates `value` to exactly `width` columns, centered.
///
/// # Example
///
/// ```
/// use rowify_text::align::center;
///
/// assert_eq!(center(8, "A"), "   A    ");
/// assert_eq!(center(5, "ab"), "  ab ");
/// assert_eq!(center(2, "abc"), "ab");
/// ```
pub fn center(width: usize, value: &str) -> String {
    center_with(width, value, ' ')
}

/// [`center`] with an explicit padding character.
pub fn center_with(width: usize, value: &str, pad: char) -> String {
    let (mut out, mut current) = fit(width, value);
    while current < width {
        if current % 2 == 1 {
            out.push(pad);
        } else {
            out.insert(0, pad);
        }
        current += 1;
    }
    out
}

/// Pads or truncates `value` to exactly `width` columns, left-aligned.
///
/// # Example
///
/// ```
/// use rowify_text::align::left;
///
/// assert_eq!(left(5, "ab"), "ab   ");
/// assert_eq!(left(2, "abc"), "ab");
/// ```
pub fn left(width: usize, value: &str) -> String {
    left_with(width, value, ' ')
}

/// [`left`] with an explicit padding character.
pub fn left_with(width: usize, value: &str, pad: char) -> String {
    let (mut out, mut current) = fit(width, value);
    while current < width {
        out.push(pad);
        current += 1;
    }
    out
}

/// Pads or truncates `value` to exactly `width` columns, right-aligned.
///
/// Truncation stays left-anchored, matching the other two primitives.
///
/// # Example
///
/// ```
/// use rowify_text::align::right;
///
/// assert_eq!(right(5, "ab"), "   ab");
/// assert_eq!(right(2, "abc"), "ab");
/// ```
pub fn right(width: usize, value: &str) -> String {
    right_with(width, value, ' ')
}

/// [`right`] with an explicit padding character.
pub fn right_with(width: usize, value: &str, pad: char) -> String {
    let (mut out, mut current) = fit(width, value);
    while current < width {
        out.insert(0, pad);
        current += 1;
    }
    out
}

/// Truncates `value` to at most `width` columns, by grapheme cluster.
///
/// Returns the kept prefix and its display width. A wide grapheme that
/// would straddle the limit is dropped; the caller pads the shortfall.
fn fit(width: usize, value: &str) -> (String, usize) {
    if display_width(value) <= width {
        return (value.to_string(), display_width(value));
    }

    let mut out = String::new();
    let mut current = 0;
    for grapheme in value.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if current + gw > width {
            break;
        }
        out.push_str(grapheme);
        current += gw;
    }
    (out, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_center_left_bias() {
        // Padding alternates append-then-prepend, so the extra column of an
        // uneven split lands on the right.
        assert_eq!(center(2, "a"), "a ");
        assert_eq!(center(3, "a"), " a ");
        assert_eq!(center(4, "a"), " a  ");
        assert_eq!(center(8, "A"), "   A    ");
    }

    #[test]
    fn test_center_exact_and_truncated() {
        assert_eq!(center(3, "abc"), "abc");
        assert_eq!(center(2, "abc"), "ab");
        assert_eq!(center(0, "abc"), "");
    }

    #[test]
    fn test_left_and_right() {
        assert_eq!(left(4, "ab"), "ab  ");
        assert_eq!(right(4, "ab"), "  ab");
        assert_eq!(left(4, "abcdef"), "abcd");
        assert_eq!(right(4, "abcdef"), "abcd");
    }

    #[test]
    fn test_custom_padding() {
        assert_eq!(left_with(4, "ab", '.'), "ab..");
        assert_eq!(right_with(4, "ab", '.'), "..ab");
        assert_eq!(center_with(4, "x", '-'), "-x--");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(center(3, ""), "   ");
        assert_eq!(left(3, ""), "   ");
        assert_eq!(right(3, ""), "   ");
        assert_eq!(center(0, ""), "");
    }

    #[test]
    fn test_exact_width_guarantee() {
        for width in 0..12 {
            for value in ["", "a", "hello", "hello world", "日本語"] {
                assert_eq!(display_width(&center(width, value)), width);
                assert_eq!(display_width(&left(width, value)), width);
                assert_eq!(display_width(&right(width, value)), width);
            }
        }
    }

    #[test]
    fn test_wide_grapheme_truncation() {
        // "本" would straddle the limit, so it is dropped and padded over.
        assert_eq!(left(3, "日本"), "日 ");
        assert_eq!(right(3, "日本"), " 日");
        assert_eq!(center(5, "日本"), " 日本");
    }
}
