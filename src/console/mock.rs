// src/console/mock.rs

use super::SystemConsole;
use crate::ansi;
use anyhow::{anyhow, Result};
use std::collections::VecDeque;
use std::io::Write;

/// In-memory console: keys come from a queue, output is captured.
#[derive(Debug, Default)]
pub struct MockConsole {
    keys: VecDeque<u8>,
    output: Vec<u8>,
    cursor_visible: bool,
    cursor_position: (u16, u16),
}

impl MockConsole {
    pub fn new() -> Self {
        Self {
            cursor_visible: true,
            ..Self::default()
        }
    }

    pub fn push_keys(&mut self, keys: &[u8]) {
        self.keys.extend(keys.iter().copied());
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn cursor_position(&self) -> (u16, u16) {
        self.cursor_position
    }
}

impl SystemConsole for MockConsole {
    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn is_key_available(&mut self) -> Result<bool> {
        Ok(!self.keys.is_empty())
    }

    fn read_key(&mut self) -> Result<u8> {
        self.keys
            .pop_front()
            .ok_or_else(|| anyhow!("MockConsole: no keys queued"))
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn set_cursor_position(&mut self, left: u16, top: u16) -> Result<()> {
        self.cursor_position = (left, top);
        self.output
            .extend_from_slice(ansi::cursor_position(left, top).as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ConsoleBuffer;
    use crate::console::present;

    #[test_log::test]
    fn present_homes_cursor_then_writes_buffer() {
        let mut buffer = ConsoleBuffer::new(2, 1).unwrap();
        buffer.draw_text(0, 0, "ok");
        let mut console = MockConsole::new();
        console.set_cursor_position(3, 3).unwrap();

        present(&buffer, &mut console).unwrap();

        assert_eq!(console.cursor_position(), (0, 0));
        assert!(console
            .output_string()
            .ends_with("\x1b[1;1H\x1b[30m\x1b[40mok"));
    }

    #[test_log::test]
    fn keys_are_read_in_order() {
        let mut console = MockConsole::new();
        assert!(!console.is_key_available().unwrap());
        console.push_keys(b"qa");
        assert!(console.is_key_available().unwrap());
        assert_eq!(console.read_key().unwrap(), b'q');
        assert_eq!(console.read_key().unwrap(), b'a');
        assert!(console.read_key().is_err());
    }

    #[test_log::test]
    fn cursor_visibility_round_trips() {
        let mut console = MockConsole::new();
        assert!(console.cursor_visible());
        console.set_cursor_visible(false).unwrap();
        assert!(!console.cursor_visible());
    }
}
