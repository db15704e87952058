// src/color.rs

//! Defines the 8-entry palette (`NamedColor`) and the color-or-default
//! value (`Color`) stored in every cell.

use log::warn;
use serde::{Deserialize, Serialize};

/// Number of palette entries addressable by a `Color::Named`.
pub const PALETTE_SIZE: u8 = 8;

/// Standard ANSI named colors (indices 0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl NamedColor {
    const ALL: [NamedColor; PALETTE_SIZE as usize] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Converts a palette index (0-7) to a `NamedColor`.
    /// Returns `None` for anything past the end of the palette.
    pub fn from_index(idx: u8) -> Option<Self> {
        let color = Self::ALL.get(idx as usize).copied();
        if color.is_none() {
            warn!("Invalid NamedColor index: {}. Must be 0-7.", idx);
        }
        color
    }

    /// The palette index of this color.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// SGR parameter selecting this color as the foreground (30-37).
    pub fn sgr_foreground(self) -> u8 {
        30 + self.index()
    }

    /// SGR parameter selecting this color as the background (40-47).
    pub fn sgr_background(self) -> u8 {
        40 + self.index()
    }
}

/// A cell or buffer color: either an explicit palette entry or
/// `Default`, meaning "inherit the buffer's current color for this channel".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Color {
    #[default]
    Default,
    Named(NamedColor),
}

impl Color {
    /// Shorthand for `Color::Named` from a raw palette index.
    /// Out-of-range indices map to `Color::Default`.
    pub fn from_index(idx: u8) -> Self {
        NamedColor::from_index(idx).map_or(Color::Default, Color::Named)
    }

    pub fn is_default(self) -> bool {
        matches!(self, Color::Default)
    }

    /// Returns `self` unless it is `Default`, in which case `fallback` is used.
    pub fn or(self, fallback: Color) -> Color {
        match self {
            Color::Default => fallback,
            named => named,
        }
    }

    /// Resolves to a concrete palette entry, substituting `fallback` for `Default`.
    pub fn resolve(self, fallback: NamedColor) -> NamedColor {
        match self {
            Color::Default => fallback,
            Color::Named(nc) => nc,
        }
    }
}

impl From<NamedColor> for Color {
    fn from(nc: NamedColor) -> Self {
        Color::Named(nc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_covers_palette() {
        for idx in 0..PALETTE_SIZE {
            let nc = NamedColor::from_index(idx).unwrap();
            assert_eq!(nc.index(), idx);
        }
        assert_eq!(NamedColor::from_index(8), None);
    }

    #[test]
    fn sgr_codes() {
        assert_eq!(NamedColor::Black.sgr_foreground(), 30);
        assert_eq!(NamedColor::White.sgr_foreground(), 37);
        assert_eq!(NamedColor::Green.sgr_background(), 42);
    }

    #[test]
    fn default_is_distinct_from_black() {
        assert_ne!(Color::Default, Color::Named(NamedColor::Black));
        assert_eq!(Color::default(), Color::Default);
        assert_eq!(Color::from_index(9), Color::Default);
    }

    #[test]
    fn or_and_resolve_only_replace_default() {
        let red = Color::Named(NamedColor::Red);
        assert_eq!(Color::Default.or(red), red);
        assert_eq!(red.or(Color::Named(NamedColor::Blue)), red);
        assert_eq!(Color::Default.resolve(NamedColor::Black), NamedColor::Black);
        assert_eq!(red.resolve(NamedColor::Black), NamedColor::Red);
    }

    #[test]
    fn serde_round_trip_of_named() {
        let json = serde_json::to_string(&Color::Named(NamedColor::Cyan)).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Named(NamedColor::Cyan));
    }
}
