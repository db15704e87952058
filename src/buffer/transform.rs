// src/buffer/transform.rs

//! Structural transforms: toroidal scroll, mirror flips, square rotation,
//! and sub-region copy.

use super::ConsoleBuffer;
use crate::error::BufferError;
use log::{debug, trace};

impl ConsoleBuffer {
    /// Shifts the whole grid `xd` columns right and `yd` rows down, wrapping
    /// content that leaves one edge around to the opposite edge.
    /// Negative values shift left/up. No cell is lost or cleared.
    pub fn scroll(&mut self, xd: i32, yd: i32) {
        let dx = xd.rem_euclid(self.w()) as usize;
        let dy = yd.rem_euclid(self.h()) as usize;
        trace!("scroll: xd={} yd={} (effective {}, {})", xd, yd, dx, dy);

        if dx != 0 {
            for row in self.cells.chunks_mut(self.width) {
                row.rotate_right(dx);
            }
        }
        if dy != 0 {
            self.cells.rotate_right(dy * self.width);
        }
    }

    /// Mirrors the grid. `vertical` swaps row `i` with row `height - 1 - i`;
    /// `horizontal` reverses every row. Both may be applied in one call.
    pub fn flip(&mut self, horizontal: bool, vertical: bool) {
        let width = self.width;
        if vertical {
            for i in 0..self.height / 2 {
                let mirror = self.height - 1 - i;
                let (upper, lower) = self.cells.split_at_mut(mirror * width);
                upper[i * width..(i + 1) * width].swap_with_slice(&mut lower[..width]);
            }
        }
        if horizontal {
            for row in self.cells.chunks_mut(width) {
                row.reverse();
            }
        }
    }

    /// Rotates the `size` x `size` square anchored at `(x, y)` by 90 degrees.
    ///
    /// Geometry rejected by the clipping check is ignored. A square that
    /// passes that check but cannot be snapshotted whole (it hangs off the
    /// grid) is left unchanged.
    pub fn rotate(&mut self, x: i32, y: i32, size: i32, clockwise: bool) {
        if size <= 0 || self.is_rect_out_of_bounds(x, y, size, size) {
            trace!("rotate: rejected size {} at ({}, {})", size, x, y);
            return;
        }

        let snapshot = match self.copy(x, y, size, size) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!("rotate: skipping, cannot snapshot region: {}", e);
                return;
            }
        };

        let last = size - 1;
        for (idx, &cell) in snapshot.cells.iter().enumerate() {
            // `i` is the source row, `j` the source column.
            let i = idx as i32 / size;
            let j = idx as i32 % size;
            let (dest_col, dest_row) = if clockwise {
                (last - i, j)
            } else {
                (i, last - j)
            };
            self.put(x + dest_col, y + dest_row, cell);
        }
    }

    /// Returns a new buffer holding a copy of the `width` x `height` region at
    /// `(x, y)`. The copy inherits this buffer's current colors.
    ///
    /// # Errors
    /// - `BufferError::InvalidDimensions` if `width` or `height` is not positive.
    /// - `BufferError::OutOfBoundsRect` if the region is not entirely inside
    ///   the grid. Unlike drawing, a copy is never silently truncated.
    pub fn copy(&self, x: i32, y: i32, width: i32, height: i32) -> Result<ConsoleBuffer, BufferError> {
        if width <= 0 || height <= 0 {
            return Err(BufferError::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        if !self.is_rect_fully_in_bounds(x, y, width, height) {
            return Err(BufferError::OutOfBoundsRect {
                x,
                y,
                width,
                height,
            });
        }

        let mut region = ConsoleBuffer::new(width as usize, height as usize)?;
        region.set_current_colors(self.current_fg, self.current_bg);

        let row_len = width as usize;
        for (row, dest) in region.cells.chunks_mut(row_len).enumerate() {
            let start = self.index_of(x, y + row as i32);
            dest.copy_from_slice(&self.cells[start..start + row_len]);
        }
        Ok(region)
    }
}
