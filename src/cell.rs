// src/cell.rs

//! Defines the `Cell` type: one grid position's glyph and its two colors.
//!
//! Cells are plain values. Every "mutation" below returns a new `Cell`;
//! a cell has no identity outside its slot in a `ConsoleBuffer`.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single character cell in a `ConsoleBuffer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// The character displayed in the cell. `'\0'` means "no glyph".
    pub c: char,
    /// Foreground color, or `Color::Default` to inherit the buffer's.
    pub fg: Color,
    /// Background color, or `Color::Default` to inherit the buffer's.
    pub bg: Color,
}

impl Cell {
    /// The zero cell: NUL character with both colors `Default`.
    /// Treated as "empty" by box drawing and as transparent by `draw_buffer`.
    pub const ZERO: Cell = Cell {
        c: '\0',
        fg: Color::Default,
        bg: Color::Default,
    };

    pub const fn new(c: char, fg: Color, bg: Color) -> Self {
        Cell { c, fg, bg }
    }

    /// A cell carrying `c` with both colors left to the buffer defaults.
    pub const fn from_char(c: char) -> Self {
        Cell {
            c,
            fg: Color::Default,
            bg: Color::Default,
        }
    }

    pub fn with_char(self, c: char) -> Self {
        Cell { c, ..self }
    }

    pub fn with_foreground(self, fg: Color) -> Self {
        Cell { fg, ..self }
    }

    pub fn with_background(self, bg: Color) -> Self {
        Cell { bg, ..self }
    }

    /// Fills in whichever of this cell's colors are `Default` with the given
    /// values. Explicit colors are kept, so this never downgrades a channel
    /// back to `Default`.
    pub fn override_defaults(self, fg: Color, bg: Color) -> Self {
        Cell {
            c: self.c,
            fg: self.fg.or(fg),
            bg: self.bg.or(bg),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Cell::ZERO
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::ZERO
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Cell::from_char(c)
    }
}

// Prints only the character, not its colors.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    const RED: Color = Color::Named(NamedColor::Red);
    const BLUE: Color = Color::Named(NamedColor::Blue);

    #[test]
    fn with_builders_replace_one_field() {
        let base = Cell::new('a', RED, BLUE);
        assert_eq!(base.with_char('b'), Cell::new('b', RED, BLUE));
        assert_eq!(base.with_foreground(BLUE), Cell::new('a', BLUE, BLUE));
        assert_eq!(base.with_background(RED), Cell::new('a', RED, RED));
    }

    #[test]
    fn override_defaults_is_a_merge() {
        let cell = Cell::new('x', Color::Default, BLUE);
        let merged = cell.override_defaults(RED, RED);
        assert_eq!(merged, Cell::new('x', RED, BLUE));

        // Passing Default never erases an explicit color.
        let explicit = Cell::new('x', RED, BLUE);
        assert_eq!(
            explicit.override_defaults(Color::Default, Color::Default),
            explicit
        );
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Cell::new('a', RED, BLUE), Cell::new('a', RED, BLUE));
        assert_ne!(Cell::new('a', RED, BLUE), Cell::new('a', BLUE, BLUE));
        assert_ne!(Cell::new('a', RED, BLUE), Cell::new('b', RED, BLUE));
    }

    #[test]
    fn zero_cell() {
        assert!(Cell::default().is_zero());
        assert!(!Cell::from_char(' ').is_zero());
        assert_eq!(Cell::ZERO.to_string(), "\0");
    }
}
