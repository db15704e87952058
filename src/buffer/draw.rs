// src/buffer/draw.rs

//! Drawing primitives: text, single cells, filled rectangles, boxes, lines,
//! reads, and compositing one buffer onto another.
//!
//! Every primitive starts with a bounds check and silently does nothing for
//! geometry that cannot touch the grid. Geometry that partially overlaps is
//! clipped per cell.

use super::ConsoleBuffer;
use crate::cell::Cell;
use crate::color::Color;
use crate::error::BufferError;
use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

/// Axis along which `draw_line` advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Saturating conversion of a length to the signed coordinate space.
fn signed_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

impl ConsoleBuffer {
    /// Draws `text` on row `y` starting at column `x` with the current colors.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.draw_text_with_colors(x, y, text, self.current_fg, self.current_bg);
    }

    /// Draws `text` with an explicit foreground and the current background.
    pub fn draw_text_with_color(&mut self, x: i32, y: i32, text: &str, fg: Color) {
        self.draw_text_with_colors(x, y, text, fg, self.current_bg);
    }

    /// Draws `text` with explicit colors. Characters past the right edge are
    /// dropped, as are characters that would land left of column 0.
    pub fn draw_text_with_colors(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        let chars: Vec<char> = text.chars().collect();
        let len = signed_len(chars.len());
        if self.is_rect_out_of_bounds(x, y, len, 1) {
            trace!("draw_text: rejected {:?} at ({}, {})", text, x, y);
            return;
        }

        let max_len = min(len, self.w().saturating_sub(x));
        for (i, &c) in chars.iter().take(max(max_len, 0) as usize).enumerate() {
            let col = x + i as i32;
            if col < 0 {
                continue;
            }
            let idx = self.index_of(col, y);
            self.cells[idx] = Cell::new(c, fg, bg);
        }
    }

    /// Writes a single cell as given (no color resolution).
    pub fn draw_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if self.is_point_out_of_bounds(x, y) {
            trace!("draw_cell: ({}, {}) out of bounds", x, y);
            return;
        }
        let idx = self.index_of(x, y);
        self.cells[idx] = cell;
    }

    /// Fills the `width` x `height` block at `(x, y)` with `cell`, after
    /// resolving its default colors against the current colors.
    pub fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        if width <= 0 || height <= 0 || self.is_rect_out_of_bounds(x, y, width, height) {
            trace!(
                "draw_rectangle: rejected {}x{} at ({}, {})",
                width,
                height,
                x,
                y
            );
            return;
        }

        let cell = self.resolve(cell);
        let (cols, rows) = self.clip_extent(x, y, width, height);
        for row in rows {
            let start = self.index_of(cols.start, row);
            let end = start + cols.len();
            self.cells[start..end].fill(cell);
        }
    }

    /// Draws a border using the same cell for every edge and corner.
    pub fn draw_box(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        self.draw_box_complex(x, y, width, height, cell, cell, cell);
    }

    /// Draws a border around the `width` x `height` rectangle at `(x, y)`.
    ///
    /// Corners use `corner`, the top and bottom edges use `top_bottom`, and the
    /// left and right edges use `sides`. The interior is left untouched, as is
    /// any border position whose resolved style is the zero cell.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_box_complex(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        sides: Cell,
        top_bottom: Cell,
        corner: Cell,
    ) {
        if width <= 0 || height <= 0 || self.is_rect_out_of_bounds(x, y, width, height) {
            trace!("draw_box: rejected {}x{} at ({}, {})", width, height, x, y);
            return;
        }

        let sides = self.resolve(sides);
        let top_bottom = self.resolve(top_bottom);
        let corner = self.resolve(corner);

        let (cols, rows) = self.clip_extent(x, y, width, height);
        for row in rows {
            let i = row - y;
            for col in cols.clone() {
                let j = col - x;
                let first_row = i == 0;
                let last_row = i == height - 1;
                let first_col = j == 0;
                let last_col = j == width - 1;

                let cell = if (first_row || last_row) && (first_col || last_col) {
                    corner
                } else if first_row || last_row {
                    top_bottom
                } else if first_col || last_col {
                    sides
                } else {
                    Cell::ZERO
                };

                if cell.is_zero() {
                    continue;
                }
                let idx = self.index_of(col, row);
                self.cells[idx] = cell;
            }
        }
    }

    /// Writes `length` copies of `cell` from `(x, y)` rightwards or downwards,
    /// stopping at the grid edge.
    pub fn draw_line(&mut self, x: i32, y: i32, length: i32, direction: Direction, cell: Cell) {
        if length <= 0 || self.is_point_out_of_bounds(x, y) {
            trace!("draw_line: rejected length {} at ({}, {})", length, x, y);
            return;
        }

        let cell = self.resolve(cell);
        let start = self.index_of(x, y);
        match direction {
            Direction::Horizontal => {
                let n = min(length, self.w() - x) as usize;
                self.cells[start..start + n].fill(cell);
            }
            Direction::Vertical => {
                let n = min(length, self.h() - y) as usize;
                for idx in (start..).step_by(self.width).take(n) {
                    self.cells[idx] = cell;
                }
            }
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    /// Returns `BufferError::OutOfBounds` if the point is outside the grid.
    pub fn get_cell_at(&self, x: i32, y: i32) -> Result<Cell, BufferError> {
        if self.is_point_out_of_bounds(x, y) {
            return Err(BufferError::OutOfBounds { x, y });
        }
        Ok(self.cells[self.index_of(x, y)])
    }

    /// Reads up to `length` characters of row `y` from column `x`, clipped to
    /// the row, with surrounding whitespace (and NUL padding) trimmed.
    pub fn get_string_at(&self, x: i32, y: i32, length: i32) -> String {
        if length <= 0 || self.is_rect_out_of_bounds(x, y, length, 1) {
            return String::new();
        }

        let (cols, _) = self.clip_extent(x, y, length, 1);
        let start = self.index_of(cols.start, y);
        let text: String = self.cells[start..start + cols.len()]
            .iter()
            .map(|cell| cell.c)
            .collect();
        text.trim_matches(|c: char| c.is_whitespace() || c == '\0')
            .to_string()
    }

    /// Stamps `source` onto this buffer with its top-left corner at `(x, y)`.
    ///
    /// Source cells whose character is NUL are transparent and leave the
    /// destination alone. Destination positions outside the grid are skipped.
    pub fn draw_buffer(&mut self, x: i32, y: i32, source: &ConsoleBuffer) {
        for (i, row) in source.cells.chunks(source.width).enumerate() {
            let dest_y = y.saturating_add(i as i32);
            for (j, &cell) in row.iter().enumerate() {
                if cell.c == '\0' {
                    continue;
                }
                self.put(x.saturating_add(j as i32), dest_y, cell);
            }
        }
    }

    /// Intersects a rectangle with the grid, returning the visible column and
    /// row ranges. Callers must have rejected out-of-bounds rectangles first.
    fn clip_extent(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let cols = max(x, 0)..min(x.saturating_add(width), self.w());
        let rows = max(y, 0)..min(y.saturating_add(height), self.h());
        (cols, rows)
    }
}
