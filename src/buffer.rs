// src/buffer.rs

//! The `ConsoleBuffer` grid: a fixed-size, row-major sequence of cells plus
//! the buffer's current foreground/background colors.
//!
//! Drawing primitives live in `draw`, structural transforms in `transform`,
//! and the ANSI serializer in `crate::ansi`. All of them address cells with
//! signed `(x, y)` coordinates so callers may pass partially off-grid
//! geometry and have it clipped.

use crate::cell::Cell;
use crate::color::Color;
use crate::config::Config;
use crate::error::BufferError;
use log::debug;

mod draw;
mod transform;

pub use draw::Direction;

/// A width x height grid of cells, stored row-major (`index = x + y * width`).
///
/// The cell vector is allocated once and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleBuffer {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    current_fg: Color,
    current_bg: Color,
}

impl ConsoleBuffer {
    /// Creates a buffer of the given size with every cell set to `Cell::ZERO`.
    ///
    /// # Errors
    /// Returns `BufferError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, BufferError> {
        let addressable = width
            .checked_mul(height)
            .is_some_and(|len| i32::try_from(len).is_ok());
        if width == 0 || height == 0 || !addressable {
            return Err(BufferError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        debug!("ConsoleBuffer::new: {}x{}", width, height);
        Ok(ConsoleBuffer {
            cells: vec![Cell::ZERO; width * height],
            width,
            height,
            current_fg: Color::Default,
            current_bg: Color::Default,
        })
    }

    /// Creates a buffer sized by `config.appearance` whose current colors
    /// come from `config.colors`.
    ///
    /// # Errors
    /// Returns `BufferError::InvalidDimensions` for a zero-sized configuration.
    pub fn from_config(config: &Config) -> Result<Self, BufferError> {
        let mut buffer = Self::new(
            config.appearance.columns as usize,
            config.appearance.rows as usize,
        )?;
        buffer.set_current_colors(config.colors.foreground, config.colors.background);
        Ok(buffer)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn current_foreground(&self) -> Color {
        self.current_fg
    }

    pub fn current_background(&self) -> Color {
        self.current_bg
    }

    /// Sets the colors substituted for `Color::Default` when drawing and
    /// serializing.
    pub fn set_current_colors(&mut self, fg: Color, bg: Color) {
        self.current_fg = fg;
        self.current_bg = bg;
    }

    /// Overwrites every cell with `cell` as given.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Resets every cell to `Cell::ZERO`. Current colors are kept.
    pub fn clear(&mut self) {
        self.fill(Cell::ZERO);
    }

    // --- Bounds and clipping predicates ---

    /// True iff `(x, y)` does not address a cell.
    pub fn is_point_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.w() || y < 0 || y >= self.h()
    }

    /// True iff the rectangle cannot touch the grid: its origin lies past the
    /// right or bottom edge, or the whole extent lies before column/row 0.
    ///
    /// A rectangle whose origin is in the grid is never out of bounds, no
    /// matter how far its extent overflows; callers clip it cell by cell.
    pub fn is_rect_out_of_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        x >= self.w()
            || y >= self.h()
            || x.saturating_add(width) <= 0
            || y.saturating_add(height) <= 0
    }

    /// True iff the rectangle lies entirely inside the grid.
    pub fn is_rect_fully_in_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        x >= 0
            && x.saturating_add(width) <= self.w()
            && y >= 0
            && y.saturating_add(height) <= self.h()
    }

    // --- Internal addressing helpers ---

    fn w(&self) -> i32 {
        self.width as i32
    }

    fn h(&self) -> i32 {
        self.height as i32
    }

    /// Row-major index of a point. Callers must have bounds-checked it.
    fn index_of(&self, x: i32, y: i32) -> usize {
        x as usize + y as usize * self.width
    }

    /// Writes `cell` if `(x, y)` is inside the grid.
    fn put(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.is_point_out_of_bounds(x, y) {
            let idx = self.index_of(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Resolves `cell`'s default colors against the current colors.
    fn resolve(&self, cell: Cell) -> Cell {
        cell.override_defaults(self.current_fg, self.current_bg)
    }
}
