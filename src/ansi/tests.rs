// src/ansi/tests.rs

use crate::ansi::{cursor_position, push_sgr, SgrState};
use crate::buffer::ConsoleBuffer;
use crate::cell::Cell;
use crate::color::{Color, NamedColor};
use std::io::{self, Write};

const GREEN: Color = Color::Named(NamedColor::Green);
const RED: Color = Color::Named(NamedColor::Red);

fn render(buffer: &ConsoleBuffer) -> String {
    let mut out = Vec::new();
    buffer.write_buffer(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// --- SGR helpers ---

#[test_log::test]
fn test_push_sgr_formats_escape() {
    let mut out = String::new();
    push_sgr(&mut out, 31);
    push_sgr(&mut out, 47);
    assert_eq!(out, "\x1b[31m\x1b[47m");
}

#[test_log::test]
fn test_cursor_position_is_one_based() {
    assert_eq!(cursor_position(0, 0), "\x1b[1;1H");
    assert_eq!(cursor_position(9, 4), "\x1b[5;10H");
}

#[test_log::test]
fn test_sgr_state_emits_only_changes() {
    let mut sgr = SgrState::new();
    let mut out = String::new();
    sgr.transition(&mut out, NamedColor::Red, NamedColor::Black);
    assert_eq!(out, "\x1b[31m\x1b[40m");

    out.clear();
    sgr.transition(&mut out, NamedColor::Red, NamedColor::Black);
    assert!(out.is_empty());

    sgr.transition(&mut out, NamedColor::Red, NamedColor::Blue);
    assert_eq!(out, "\x1b[44m", "only the background changed");
}

// --- Serializer ---

#[test_log::test]
fn test_uniform_row_emits_one_escape_per_channel() {
    let mut buffer = ConsoleBuffer::new(4, 1).unwrap();
    buffer.fill(Cell::new('a', GREEN, RED));
    assert_eq!(render(&buffer), "\x1b[32m\x1b[41maaaa");
}

#[test_log::test]
fn test_rows_are_newline_separated_without_trailing_newline() {
    let mut buffer = ConsoleBuffer::new(2, 3).unwrap();
    buffer.draw_text(0, 0, "ab");
    buffer.draw_text(0, 1, "cd");
    buffer.draw_text(0, 2, "ef");
    assert_eq!(render(&buffer), "\x1b[30m\x1b[40mab\ncd\nef");
}

#[test_log::test]
fn test_empty_buffer_renders_spaces_in_black() {
    let buffer = ConsoleBuffer::new(3, 1).unwrap();
    assert_eq!(render(&buffer), "\x1b[30m\x1b[40m   ");
}

#[test_log::test]
fn test_default_cell_colors_use_current_colors() {
    let mut buffer = ConsoleBuffer::new(2, 1).unwrap();
    buffer.set_current_colors(RED, GREEN);
    buffer.draw_cell(0, 0, Cell::from_char('x'));
    buffer.draw_cell(1, 0, Cell::new('y', GREEN, Color::Default));
    assert_eq!(render(&buffer), "\x1b[31m\x1b[42mx\x1b[32my");
}

#[test_log::test]
fn test_control_characters_become_spaces() {
    let mut buffer = ConsoleBuffer::new(3, 1).unwrap();
    buffer.draw_text(0, 0, "a\tb");
    assert!(render(&buffer).ends_with("a b"));
}

#[test_log::test]
fn test_explicit_black_and_default_share_escape() {
    let mut buffer = ConsoleBuffer::new(2, 1).unwrap();
    buffer.draw_cell(0, 0, Cell::new('a', Color::Named(NamedColor::Black), Color::Default));
    buffer.draw_cell(1, 0, Cell::from_char('b'));
    assert_eq!(render(&buffer), "\x1b[30m\x1b[40mab");
}

#[test_log::test]
fn test_color_change_spans_row_boundary() {
    let mut buffer = ConsoleBuffer::new(1, 2).unwrap();
    buffer.draw_cell(0, 0, Cell::new('a', RED, RED));
    buffer.draw_cell(0, 1, Cell::new('b', RED, GREEN));
    assert_eq!(render(&buffer), "\x1b[31m\x1b[41ma\n\x1b[42mb");
}

#[test_log::test]
fn test_to_ansi_string_matches_write_buffer() {
    let mut buffer = ConsoleBuffer::new(5, 2).unwrap();
    buffer.draw_text_with_color(1, 1, "hey", Color::Named(NamedColor::Cyan));
    assert_eq!(buffer.to_ansi_string(), render(&buffer));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test_log::test]
fn test_sink_failure_is_propagated() {
    let buffer = ConsoleBuffer::new(2, 2).unwrap();
    let err = buffer.write_buffer(&mut FailingWriter).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
