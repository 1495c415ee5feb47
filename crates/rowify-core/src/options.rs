//! Render configuration: delimiters, borders and header display.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The pair of strings framing each rendered line.
///
/// When no border is given, one is derived from the first delimiter so that
/// symmetric delimiters produce an unbroken table: the right half of the
/// delimiter (the extra character goes to the right half) becomes the left
/// border and the left half becomes the right border. An explicit border
/// defaults unspecified sides to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    /// String prefixed to every rendered line.
    #[serde(default)]
    pub left: String,
    /// String suffixed to every rendered line.
    #[serde(default)]
    pub right: String,
}

impl Border {
    /// Creates a border with explicit sides.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// A border with both sides empty.
    pub fn none() -> Self {
        Self::default()
    }

    /// Derives the default border from a delimiter.
    ///
    /// Splitting is by character count; for an odd-length delimiter the
    /// middle character lands in both halves, keeping the framed line the
    /// same visual weight as an interior column boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowify_core::Border;
    ///
    /// assert_eq!(Border::from_delimiter(" | "), Border::new("| ", " |"));
    /// assert_eq!(Border::from_delimiter(" "), Border::new(" ", " "));
    /// ```
    pub fn from_delimiter(delimiter: &str) -> Self {
        let count = delimiter.chars().count();
        let keep = count.div_ceil(2);
        let left: String = delimiter.chars().skip(count - keep).collect();
        let right: String = delimiter.chars().take(keep).collect();
        Self { left, right }
    }
}

/// Options controlling table rendering.
///
/// # Examples
///
/// ```
/// use rowify_core::{Border, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_delimiters([" | ", " : "])
///     .with_border(Border::new("[", "]"))
///     .with_show_headers(false);
///
/// assert_eq!(options.delimiter_at(0), " | ");
/// assert_eq!(options.delimiter_at(5), " : ");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Column separators by nesting depth; the last entry is reused for all
    /// deeper levels. Must not be empty.
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<String>,
    /// Optional explicit border; derived from the first delimiter when
    /// omitted.
    #[serde(default)]
    pub border: Option<Border>,
    /// Whether header rows are emitted and leaf widths account for field
    /// names.
    #[serde(default = "default_show_headers")]
    pub show_headers: bool,
}

fn default_delimiters() -> Vec<String> {
    vec![" ".to_string()]
}

fn default_show_headers() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            border: None,
            show_headers: default_show_headers(),
        }
    }
}

impl RenderOptions {
    /// Creates the default options: a single-space delimiter, derived
    /// border, headers shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the delimiter list.
    #[must_use]
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Uses a single delimiter at every depth.
    #[must_use]
    pub fn with_delimiter(self, delimiter: impl Into<String>) -> Self {
        self.with_delimiters([delimiter.into()])
    }

    /// Sets an explicit border.
    #[must_use]
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets whether header rows are rendered.
    #[must_use]
    pub fn with_show_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }

    /// Delimiter used at nesting depth `depth` (last entry repeats).
    ///
    /// # Panics
    ///
    /// Panics when the delimiter list is empty; call
    /// [`validate`](Self::validate) first.
    pub fn delimiter_at(&self, depth: usize) -> &str {
        &self.delimiters[depth.min(self.delimiters.len() - 1)]
    }

    /// The border in effect: the explicit one, or the derived default.
    pub fn effective_border(&self) -> Border {
        self.border
            .clone()
            .unwrap_or_else(|| Border::from_delimiter(&self.delimiters[0]))
    }

    /// Checks the caller contract. Fails fast on configurations that would
    /// otherwise produce misaligned output.
    pub fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(Error::EmptyDelimiters);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.delimiters, vec![" "]);
        assert_eq!(options.border, None);
        assert!(options.show_headers);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_empty_delimiters_rejected() {
        let options = RenderOptions::new().with_delimiters(Vec::<String>::new());
        assert_eq!(options.validate(), Err(Error::EmptyDelimiters));
    }

    #[test]
    fn test_delimiter_depth_rule() {
        let options = RenderOptions::new().with_delimiters([" | ", " : "]);
        assert_eq!(options.delimiter_at(0), " | ");
        assert_eq!(options.delimiter_at(1), " : ");
        assert_eq!(options.delimiter_at(2), " : ");

        let single = RenderOptions::new().with_delimiter(" / ");
        assert_eq!(single.delimiter_at(0), " / ");
        assert_eq!(single.delimiter_at(3), " / ");
    }

    #[test]
    fn test_border_from_even_delimiter() {
        // "ab" splits clean: right half "b" left border, left half "a" right.
        assert_eq!(Border::from_delimiter("ab"), Border::new("b", "a"));
    }

    #[test]
    fn test_border_from_odd_delimiter() {
        // The middle character of " | " appears on both sides.
        assert_eq!(Border::from_delimiter(" | "), Border::new("| ", " |"));
        assert_eq!(Border::from_delimiter("|"), Border::new("|", "|"));
    }

    #[test]
    fn test_border_from_empty_delimiter() {
        assert_eq!(Border::from_delimiter(""), Border::none());
    }

    #[test]
    fn test_effective_border_prefers_explicit() {
        let options = RenderOptions::new()
            .with_delimiter(" | ")
            .with_border(Border::new("<", ">"));
        assert_eq!(options.effective_border(), Border::new("<", ">"));

        let derived = RenderOptions::new().with_delimiter(" | ");
        assert_eq!(derived.effective_border(), Border::new("| ", " |"));
    }
}
