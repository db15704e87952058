// src/console/mod.rs

//! The terminal surface a composing application attaches a buffer to.
//!
//! `ConsoleBuffer` never talks to a terminal itself. An application owns a
//! `SystemConsole` implementation and calls [`present`] to push a buffer's
//! serialized form into the console's output stream.

use crate::buffer::ConsoleBuffer;
use anyhow::{Context, Result};
use log::trace;
use std::io::Write;

pub mod mock;
pub mod tty;

pub use mock::MockConsole;
pub use tty::TtyConsole;

/// Capabilities of an attached console.
pub trait SystemConsole {
    fn cursor_visible(&self) -> bool;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Returns `true` if `read_key` would return without blocking.
    fn is_key_available(&mut self) -> Result<bool>;

    /// Reads one byte of keyboard input, blocking until one arrives.
    fn read_key(&mut self) -> Result<u8>;

    /// The stream buffer output is written to.
    fn out(&mut self) -> &mut dyn Write;

    /// Moves the cursor to the 0-based column `left` and row `top`.
    fn set_cursor_position(&mut self, left: u16, top: u16) -> Result<()>;
}

/// Draws `buffer` at the console's top-left corner and flushes.
///
/// # Errors
/// Fails if positioning the cursor or writing to the console fails.
pub fn present<C: SystemConsole + ?Sized>(buffer: &ConsoleBuffer, console: &mut C) -> Result<()> {
    trace!("present: {}x{}", buffer.width(), buffer.height());
    console
        .set_cursor_position(0, 0)
        .context("present: Failed to home cursor")?;
    let out = console.out();
    buffer
        .write_buffer(out)
        .context("present: Failed to write buffer")?;
    out.flush().context("present: Failed to flush console output")
}
