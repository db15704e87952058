// src/ansi/writer.rs

//! Serializes a `ConsoleBuffer` into text with ANSI SGR color escapes.

use super::SgrState;
use crate::buffer::ConsoleBuffer;
use crate::color::NamedColor;
use log::trace;
use std::io::{self, Write};

/// Buffer-level `Color::Default` serializes as black.
const FALLBACK_COLOR: NamedColor = NamedColor::Black;

impl ConsoleBuffer {
    /// Renders the buffer row by row into a `String`.
    ///
    /// Rows are separated by `\n`. Foreground (`ESC[3Nm`) and background
    /// (`ESC[4Nm`) codes are emitted only where the effective color of a
    /// channel changes. Control characters, including the NUL of empty cells,
    /// are rendered as a space. No trailing reset is emitted.
    pub fn to_ansi_string(&self) -> String {
        let current_fg = self.current_foreground().resolve(FALLBACK_COLOR);
        let current_bg = self.current_background().resolve(FALLBACK_COLOR);

        let mut out = String::with_capacity(self.cells().len() + self.height());
        let mut sgr = SgrState::new();

        for (i, row) in self.cells().chunks(self.width()).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for cell in row {
                let fg = cell.fg.resolve(current_fg);
                let bg = cell.bg.resolve(current_bg);
                sgr.transition(&mut out, fg, bg);
                out.push(if cell.c.is_control() { ' ' } else { cell.c });
            }
        }
        out
    }

    /// Serializes the buffer (see [`ConsoleBuffer::to_ansi_string`]) and writes
    /// it to `writer` in a single `write_all`.
    ///
    /// # Errors
    /// Any error from the sink is returned as-is; nothing is retried.
    pub fn write_buffer<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        let rendered = self.to_ansi_string();
        trace!(
            "write_buffer: {}x{} -> {} bytes",
            self.width(),
            self.height(),
            rendered.len()
        );
        writer.write_all(rendered.as_bytes())
    }
}
