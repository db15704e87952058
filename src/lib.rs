// src/lib.rs

//! An in-memory character grid (`ConsoleBuffer`) with drawing primitives,
//! structural transforms, and an ANSI serializer.
//!
//! Callers draw text, shapes, and composed sub-buffers into the grid and then
//! flush it to any `std::io::Write` sink with [`ConsoleBuffer::write_buffer`].
//! The [`console`] module describes the terminal surface a composing
//! application wires that output into.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod config;
pub mod console;
pub mod error;

pub use buffer::{ConsoleBuffer, Direction};
pub use cell::Cell;
pub use color::{Color, NamedColor};
pub use error::BufferError;
