//! Immutable builder for ANSI SGR color escapes.
//!
//! A [`Paint`] carries an optional foreground and background [`Tint`]
//! (shade × base color) and wraps text in the matching escape codes,
//! resetting each ground independently (SGR 39 for foreground, 49 for
//! background) so painted fragments nest safely inside styled lines.
//!
//! # Examples
//!
//! ```
//! use rowify_text::paint::{Color, Paint, Shade};
//!
//! let error = Paint::new().fg((Shade::Light, Color::Red));
//! assert_eq!(error.paint("boom"), "\u{1b}[91mboom\u{1b}[39m");
//!
//! let badge = Paint::new()
//!     .fg((Shade::Dark, Color::Black))
//!     .bg((Shade::Light, Color::Yellow));
//! ```

/// Which ground a tint applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ground {
    /// Text color (SGR 30-37 / 90-97, reset 39).
    Foreground,
    /// Fill color (SGR 40-47 / 100-107, reset 49).
    Background,
}

impl Ground {
    fn offset(self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }

    fn reset(self) -> u8 {
        39 + self.offset()
    }
}

/// Normal or bright variant of a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    /// The normal-intensity palette (SGR 30-37).
    Dark,
    /// The bright palette (SGR 90-97).
    Light,
}

impl Shade {
    fn offset(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 60,
        }
    }
}

/// The eight base terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    fn offset(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }
}

/// A shade × color pair, the unit a ground is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    pub shade: Shade,
    pub color: Color,
}

impl Tint {
    /// Creates a tint.
    pub const fn new(shade: Shade, color: Color) -> Self {
        Self { shade, color }
    }

    /// Grey rendered as bright black.
    pub const DARK_GREY: Self = Self::new(Shade::Light, Color::Black);
    /// Grey rendered as normal-intensity white.
    pub const LIGHT_GREY: Self = Self::new(Shade::Dark, Color::White);

    fn code(self, ground: Ground) -> u8 {
        30 + ground.offset() + self.shade.offset() + self.color.offset()
    }
}

impl From<(Shade, Color)> for Tint {
    fn from((shade, color): (Shade, Color)) -> Self {
        Self::new(shade, color)
    }
}

/// An immutable pair of optional ground tints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paint {
    fg: Option<Tint>,
    bg: Option<Tint>,
}

impl Paint {
    /// Creates a paint with no tints; [`paint`](Self::paint) is then the
    /// identity.
    pub const fn new() -> Self {
        Self { fg: None, bg: None }
    }

    /// Sets the foreground tint.
    #[must_use]
    pub fn fg(mut self, tint: impl Into<Tint>) -> Self {
        self.fg = Some(tint.into());
        self
    }

    /// Sets the background tint.
    #[must_use]
    pub fn bg(mut self, tint: impl Into<Tint>) -> Self {
        self.bg = Some(tint.into());
        self
    }

    /// Wraps `text` in the escape codes for the configured tints.
    pub fn paint(&self, text: &str) -> String {
        let mut out = String::new();
        if let Some(tint) = self.fg {
            out.push_str(&format!("\u{1b}[{}m", tint.code(Ground::Foreground)));
        }
        if let Some(tint) = self.bg {
            out.push_str(&format!("\u{1b}[{}m", tint.code(Ground::Background)));
        }
        out.push_str(text);
        if self.bg.is_some() {
            out.push_str(&format!("\u{1b}[{}m", Ground::Background.reset()));
        }
        if self.fg.is_some() {
            out.push_str(&format!("\u{1b}[{}m", Ground::Foreground.reset()));
        }
        out
    }
}
