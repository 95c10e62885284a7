//! Error types for raster-core operations.
//!
//! Every pixel access in the workspace goes through the [`PixelGrid`]
//! contract, and every failed access surfaces as an [`Error`] value rather
//! than a panic or a wrapped index.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, Result};
//!
//! fn check(row: usize, col: usize, width: usize, height: usize) -> Result<()> {
//!     if row >= height || col >= width {
//!         return Err(Error::out_of_bounds(row, col, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 3, 2, 2).is_err());
//! ```
//!
//! [`PixelGrid`]: crate::grid::PixelGrid

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while accessing or building pixel grids.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds), [`InvalidRegion`](Error::InvalidRegion)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside grid bounds.
    ///
    /// Returned when accessing `[row][col]` where `row >= height` or
    /// `col >= width`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel [{row}][{col}] out of bounds for grid {width}x{height}")]
    OutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        col: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Region extends beyond grid bounds.
    #[error("region rows {row_start}..{row_end}, cols {col_start}..{col_end} exceeds grid {width}x{height}")]
    InvalidRegion {
        /// First row (inclusive)
        row_start: usize,
        /// First column (inclusive)
        col_start: usize,
        /// Last row (exclusive)
        row_end: usize,
        /// Last column (exclusive)
        col_end: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Invalid grid dimensions or a buffer whose length does not match them.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidRegion`] error from a region and the grid size.
    #[inline]
    pub fn invalid_region(region: crate::Region, width: usize, height: usize) -> Self {
        Self::InvalidRegion {
            row_start: region.row_start,
            col_start: region.col_start,
            row_end: region.row_end,
            col_end: region.col_end,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRegion { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Region;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("[100][50]"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_region() {
        let err = Error::invalid_region(Region::new(0, 0, 240, 640), 320, 240);
        assert!(err.to_string().contains("0..640"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.is_io_error());
        assert!(!err.is_bounds_error());
    }
}
