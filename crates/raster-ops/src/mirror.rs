//! Mirror operations.
//!
//! Each mirror splits the grid into a source half and a destination half
//! and copies every source cell onto its partner across the mirror axis.
//! Only the destination half is written, so no pass ever reads a cell it
//! has already overwritten.
//!
//! # Operations
//!
//! - [`mirror_vertical`] - left half onto right half
//! - [`mirror_vertical_right_to_left`] - right half onto left half
//! - [`mirror_horizontal`] - top half onto bottom half
//! - [`mirror_horizontal_bottom_to_top`] - bottom half onto top half
//! - [`mirror_diagonal`] - lower-left triangle onto its transpose
//!
//! For odd extents the middle row or column is its own partner and is left
//! alone.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelGrid, RasterGrid};
//! use raster_ops::mirror::mirror_vertical;
//!
//! let mut grid = RasterGrid::from_fn(4, 1, |_, col| Color::new(col as u8, 0, 0));
//! mirror_vertical(&mut grid).unwrap();
//! let reds: Vec<u8> = (0..4).map(|c| grid.red(0, c).unwrap()).collect();
//! assert_eq!(reds, vec![0, 1, 1, 0]);
//! ```

use crate::OpsResult;
use raster_core::PixelGrid;
use tracing::trace;

/// Mirrors the left half onto the right half, about the vertical center line.
///
/// `pixel[row][width - 1 - col] = pixel[row][col]` for `col < width / 2`.
pub fn mirror_vertical<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    let (width, height) = grid.dimensions();
    trace!(width, height, "mirror::vertical");

    for row in 0..height {
        for col in 0..width / 2 {
            let left = grid.color(row, col)?;
            grid.set_color(row, width - 1 - col, left)?;
        }
    }
    Ok(())
}

/// Mirrors the right half onto the left half.
///
/// `pixel[row][col] = pixel[row][width - 1 - col]` for `col < width / 2`.
pub fn mirror_vertical_right_to_left<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    let (width, height) = grid.dimensions();
    trace!(width, height, "mirror::vertical_right_to_left");

    for row in 0..height {
        for col in 0..width / 2 {
            let right = grid.color(row, width - 1 - col)?;
            grid.set_color(row, col, right)?;
        }
    }
    Ok(())
}

/// Mirrors the top half onto the bottom half.
///
/// `pixel[height - 1 - row][col] = pixel[row][col]` for `row < height / 2`.
pub fn mirror_horizontal<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    let (width, height) = grid.dimensions();
    trace!(width, height, "mirror::horizontal");

    for row in 0..height / 2 {
        for col in 0..width {
            let top = grid.color(row, col)?;
            grid.set_color(height - 1 - row, col, top)?;
        }
    }
    Ok(())
}

/// Mirrors the bottom half onto the top half.
///
/// `pixel[row][col] = pixel[height - 1 - row][col]` for `row < height / 2`.
pub fn mirror_horizontal_bottom_to_top<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    let (width, height) = grid.dimensions();
    trace!(width, height, "mirror::horizontal_bottom_to_top");

    for row in 0..height / 2 {
        for col in 0..width {
            let bottom = grid.color(height - 1 - row, col)?;
            grid.set_color(row, col, bottom)?;
        }
    }
    Ok(())
}

/// Mirrors the lower-left 45-45-90 triangle onto the upper-right one.
///
/// `pixel[col][row] = pixel[row][col]` for `col < min(width, row)`, applied
/// only to rows with `row < width` (the transpose cell must exist). The
/// diagonal itself is never written. On a non-square grid the upper-right
/// triangle is bounded by the shorter side.
pub fn mirror_diagonal<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    let (width, height) = grid.dimensions();
    trace!(width, height, "mirror::diagonal");

    // Rows at or past `width` have no transpose partner column.
    for row in 0..height.min(width) {
        for col in 0..row {
            let lower = grid.color(row, col)?;
            grid.set_color(col, row, lower)?;
        }
    }
    Ok(())
}
