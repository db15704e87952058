// src/error.rs

//! Errors for buffer operations that return new data or single values.
//! In-place drawing and transforms clip silently and never produce these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("point ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("region {width}x{height} at ({x}, {y}) is not fully inside the buffer")]
    OutOfBoundsRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i64, height: i64 },
}
