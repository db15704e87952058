// src/ansi/mod.rs

//! ANSI escape sequence generation: SGR color codes, cursor control, and the
//! buffer serializer (`ConsoleBuffer::write_buffer`).

use crate::color::NamedColor;

mod writer;

pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";
pub const CLEAR_SCREEN_AND_HOME: &str = "\x1b[2J\x1b[H";
const CSI: &str = "\x1b[";
const SGR_SUFFIX: char = 'm';

/// Appends `ESC[{code}m` to `out`.
pub fn push_sgr(out: &mut String, code: u8) {
    out.push_str(CSI);
    out.push_str(&code.to_string());
    out.push(SGR_SUFFIX);
}

/// Formats a cursor-position escape from 0-based column/row.
pub fn cursor_position(left: u16, top: u16) -> String {
    format!("{}{};{}H", CSI, u32::from(top) + 1, u32::from(left) + 1)
}

/// Tracks the last emitted foreground and background so the serializer only
/// emits an SGR code when a channel actually changes.
///
/// Both channels start unset, so the first cell always emits both codes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SgrState {
    fg: Option<NamedColor>,
    bg: Option<NamedColor>,
}

impl SgrState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends whatever SGR codes are needed to move from the current state
    /// to `fg`/`bg`, and records the new state.
    pub fn transition(&mut self, out: &mut String, fg: NamedColor, bg: NamedColor) {
        if self.fg != Some(fg) {
            self.fg = Some(fg);
            push_sgr(out, fg.sgr_foreground());
        }
        if self.bg != Some(bg) {
            self.bg = Some(bg);
            push_sgr(out, bg.sgr_background());
        }
    }
}

#[cfg(test)]
mod tests;
