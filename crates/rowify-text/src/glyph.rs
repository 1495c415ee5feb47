//! Box-drawing and symbol constants for hand-built terminal output.
//!
//! Grouped the way they are used: [`line`] for table rules, [`arrow`],
//! [`block`] and [`triangle`] for prompt decoration.

/// Single-line box-drawing characters.
pub mod line {
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const DOWN_RIGHT: char = '┌';
    pub const DOWN_LEFT: char = '┐';
    pub const UP_RIGHT: char = '└';
    pub const UP_LEFT: char = '┘';
    pub const VERTICAL_RIGHT: char = '├';
    pub const VERTICAL_LEFT: char = '┤';
    pub const DOWN_HORIZONTAL: char = '┬';
    pub const UP_HORIZONTAL: char = '┴';
    pub const VERTICAL_HORIZONTAL: char = '┼';
}

/// Arrow characters.
pub mod arrow {
    pub const LEFT: char = '←';
    pub const UP: char = '↑';
    pub const RIGHT: char = '→';
    pub const DOWN: char = '↓';
    pub const HORIZONTAL: char = '↔';
    pub const VERTICAL: char = '↕';
}

/// Block-element characters.
pub mod block {
    pub const UP: char = '▀';
    pub const DOWN: char = '▄';
    pub const FULL: char = '█';
    pub const LEFT: char = '▌';
    pub const RIGHT: char = '▐';
    pub const LIGHT_SHADE: char = '░';
    pub const MEDIUM_SHADE: char = '▒';
    pub const DARK_SHADE: char = '▓';
    pub const SQUARE: char = '■';
}

/// Triangle characters.
pub mod triangle {
    pub const UP: char = '▲';
    pub const RIGHT: char = '►';
    pub const DOWN: char = '▼';
    pub const LEFT: char = '◄';
}

pub const TIMES: char = '×';
pub const DIVIDED_BY: char = '÷';
pub const SUN: char = '☼';
pub const SPADE: char = '♠';
pub const CLUB: char = '♣';
pub const HEART: char = '♥';
pub const DIAMOND: char = '♦';
