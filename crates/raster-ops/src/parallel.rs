//! Row-parallel versions of the row-local operations, using Rayon.
//!
//! Only operations whose output row depends solely on the same input row
//! are provided here, so every task owns exactly one row of the buffer.
//! Results are bit-identical to the sequential versions in
//! [`crate::color`] and [`crate::mirror`].
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelGrid, RasterGrid};
//! use raster_ops::{parallel, ColorOp};
//!
//! let mut grid = RasterGrid::filled(256, 256, Color::new(10, 20, 30));
//! parallel::apply_color_op(&mut grid, ColorOp::Negate).unwrap();
//! assert_eq!(grid.color(0, 0).unwrap(), Color::new(245, 235, 225));
//! ```

use crate::OpsResult;
use crate::color::ColorOp;
use raster_core::{CHANNELS, Color, PixelGrid, RasterGrid};
use rayon::prelude::*;
use tracing::trace;

/// Parallel [`crate::color::apply_color_op`].
pub fn apply_color_op(grid: &mut RasterGrid, op: ColorOp) -> OpsResult<()> {
    trace!(width = grid.width(), height = grid.height(), op = op.name(), "parallel::color");

    grid.par_rows_mut().for_each(|row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            let c = op.apply(Color::new(px[0], px[1], px[2]));
            px.copy_from_slice(&c.to_array());
        }
    });
    Ok(())
}

/// Parallel [`crate::mirror::mirror_vertical`].
pub fn mirror_vertical(grid: &mut RasterGrid) -> OpsResult<()> {
    let width = grid.width();
    trace!(width, height = grid.height(), "parallel::mirror_vertical");

    grid.par_rows_mut().for_each(|row| {
        for col in 0..width / 2 {
            let from = col * CHANNELS;
            row.copy_within(from..from + CHANNELS, (width - 1 - col) * CHANNELS);
        }
    });
    Ok(())
}

/// Parallel [`crate::mirror::mirror_vertical_right_to_left`].
pub fn mirror_vertical_right_to_left(grid: &mut RasterGrid) -> OpsResult<()> {
    let width = grid.width();
    trace!(width, height = grid.height(), "parallel::mirror_vertical_right_to_left");

    grid.par_rows_mut().for_each(|row| {
        for col in 0..width / 2 {
            let from = (width - 1 - col) * CHANNELS;
            row.copy_within(from..from + CHANNELS, col * CHANNELS);
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color, mirror};

    fn noisy(width: usize, height: usize) -> RasterGrid {
        RasterGrid::from_fn(width, height, |row, col| {
            Color::new(
                (row * 131 + col * 7) as u8,
                (row * 17 + col * 251 + 9) as u8,
                (row * col + 40) as u8,
            )
        })
    }

    #[test]
    fn test_color_ops_match_sequential() {
        let base = noisy(37, 23);
        for op in ColorOp::ALL {
            let mut seq = base.clone();
            let mut par = base.clone();
            color::apply_color_op(&mut seq, op).unwrap();
            apply_color_op(&mut par, op).unwrap();
            assert_eq!(seq, par, "{op}");
        }
    }

    #[test]
    fn test_mirrors_match_sequential() {
        for (w, h) in [(1, 1), (2, 3), (37, 23), (64, 5)] {
            let base = noisy(w, h);

            let mut seq = base.clone();
            let mut par = base.clone();
            mirror::mirror_vertical(&mut seq).unwrap();
            mirror_vertical(&mut par).unwrap();
            assert_eq!(seq, par);

            let mut seq = base.clone();
            let mut par = base.clone();
            mirror::mirror_vertical_right_to_left(&mut seq).unwrap();
            mirror_vertical_right_to_left(&mut par).unwrap();
            assert_eq!(seq, par);
        }
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = RasterGrid::new(0, 0);
        apply_color_op(&mut grid, ColorOp::Grayscale).unwrap();
        mirror_vertical(&mut grid).unwrap();
        assert!(grid.is_empty());
    }
}
