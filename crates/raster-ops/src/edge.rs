//! Gradient-based edge detection.
//!
//! Both detectors produce a binary image: a pixel becomes [`Color::BLACK`]
//! when the color distance to its neighbors exceeds a threshold, and
//! [`Color::WHITE`] otherwise. Distance is the Euclidean norm of the RGB
//! difference ([`Color::distance`]), so the largest possible value is
//! `255 * sqrt(3)`, about 441.67.
//!
//! # Border policy
//!
//! Pixels without a full neighborhood are never written:
//!
//! - [`edge_detection`] leaves the last row and last column untouched.
//! - [`edge_detection_max_gradient`] leaves the one-pixel border of the
//!   destination at whatever it held before the call.

use crate::OpsResult;
use raster_core::{Color, PixelGrid};
use tracing::{debug, trace};

/// Seed for the four-neighbor maximum: the smallest positive `f64`.
///
/// A perfectly uniform neighborhood therefore scores just above zero, and a
/// sensitivity of exactly `0.0` marks it as an edge.
pub const GRADIENT_SEED: f64 = f64::from_bits(1);

/// Marks pixels that differ from their right or down neighbor, in place.
///
/// For every pixel outside the last row and column, the pixel becomes black
/// if its distance to the right neighbor or to the down neighbor is greater
/// than `edge_dist`, else white. Every neighbor is read before it is
/// overwritten, so the result matches a pass over an unmodified copy.
///
/// Returns the number of pixels marked black.
pub fn edge_detection<G: PixelGrid + ?Sized>(grid: &mut G, edge_dist: f64) -> OpsResult<usize> {
    let (width, height) = grid.dimensions();
    trace!(width, height, edge_dist, "edge::detection");

    let mut edges = 0usize;
    for row in 0..height.saturating_sub(1) {
        for col in 0..width.saturating_sub(1) {
            let here = grid.color(row, col)?;
            let right = grid.color(row, col + 1)?;
            let down = grid.color(row + 1, col)?;

            let is_edge = here.distance(&right) > edge_dist || here.distance(&down) > edge_dist;
            if is_edge {
                edges += 1;
            }
            grid.set_color(row, col, edge_color(is_edge))?;
        }
    }

    debug!(edges, "Edge detection done");
    Ok(edges)
}

/// Four-neighbor maximum-gradient edge detection from `source` into `dest`.
///
/// For every interior pixel of `source` (row and column in
/// `[1, extent - 2]`), takes the largest distance to the left, right, up
/// and down neighbors. The matching `dest` pixel becomes black if that
/// maximum is greater than `sensitivity`, else white. `dest` must be at
/// least as large as `source`; a missing cell fails with an out-of-bounds
/// error.
///
/// Returns the number of pixels marked black.
pub fn edge_detection_max_gradient<D, S>(dest: &mut D, source: &S, sensitivity: f64) -> OpsResult<usize>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + ?Sized,
{
    let (width, height) = source.dimensions();
    trace!(width, height, sensitivity, "edge::max_gradient");

    let mut edges = 0usize;
    for row in 1..height.saturating_sub(1) {
        for col in 1..width.saturating_sub(1) {
            let center = source.color(row, col)?;
            let neighbors = [
                source.color(row, col - 1)?,
                source.color(row, col + 1)?,
                source.color(row - 1, col)?,
                source.color(row + 1, col)?,
            ];

            let is_edge = max_gradient(center, &neighbors) > sensitivity;
            if is_edge {
                edges += 1;
            }
            dest.set_color(row, col, edge_color(is_edge))?;
        }
    }

    debug!(edges, "Max-gradient edge detection done");
    Ok(edges)
}

/// Largest distance from `center` to any neighbor, never below [`GRADIENT_SEED`].
fn max_gradient(center: Color, neighbors: &[Color]) -> f64 {
    neighbors
        .iter()
        .map(|n| center.distance(n))
        .fold(GRADIENT_SEED, f64::max)
}

#[inline]
fn edge_color(is_edge: bool) -> Color {
    if is_edge { Color::BLACK } else { Color::WHITE }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use raster_core::RasterGrid;

    #[test]
    fn test_max_gradient_value() {
        let center = Color::new(10, 10, 10);
        let neighbors = [
            Color::new(10, 10, 10),
            Color::new(13, 14, 10), // 5
            Color::new(10, 10, 22), // 12
            Color::new(9, 10, 10),  // 1
        ];
        assert_abs_diff_eq!(max_gradient(center, &neighbors), 12.0, epsilon = 1e-12);
        assert_eq!(max_gradient(center, &[center; 4]), GRADIENT_SEED);
    }

    #[test]
    fn test_uniform_is_white() {
        let fill = Color::new(12, 130, 200);
        let mut grid = RasterGrid::filled(6, 5, fill);
        let edges = edge_detection(&mut grid, 1.0).unwrap();

        assert_eq!(edges, 0);
        for row in 0..5 {
            for col in 0..6 {
                let expected = if row == 4 || col == 5 { fill } else { Color::WHITE };
                assert_eq!(grid.color(row, col).unwrap(), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_single_black_pixel() {
        let mut grid = RasterGrid::filled(6, 6, Color::WHITE);
        grid.set_color(2, 3, Color::BLACK).unwrap();
        let edges = edge_detection(&mut grid, 10.0).unwrap();

        assert_eq!(edges, 3);
        for row in 0..6 {
            for col in 0..6 {
                let black = matches!((row, col), (2, 3) | (2, 2) | (1, 3));
                let expected = if black { Color::BLACK } else { Color::WHITE };
                assert_eq!(grid.color(row, col).unwrap(), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        // Distance between these is exactly 10.
        let mut grid = RasterGrid::filled(2, 2, Color::new(0, 0, 0));
        grid.set_color(0, 1, Color::new(10, 0, 0)).unwrap();
        assert_eq!(edge_detection(&mut grid.clone(), 10.0).unwrap(), 0);
        assert_eq!(edge_detection(&mut grid, 9.5).unwrap(), 1);
    }

    #[test]
    fn test_tiny_grids() {
        let mut one = RasterGrid::filled(1, 1, Color::BLACK);
        assert_eq!(edge_detection(&mut one, 1.0).unwrap(), 0);
        assert_eq!(one.color(0, 0).unwrap(), Color::BLACK);

        let mut empty = RasterGrid::new(0, 0);
        assert_eq!(edge_detection(&mut empty, 1.0).unwrap(), 0);

        let src = RasterGrid::filled(2, 2, Color::BLACK);
        let mut dst = RasterGrid::filled(2, 2, Color::new(1, 2, 3));
        assert_eq!(edge_detection_max_gradient(&mut dst, &src, 1.0).unwrap(), 0);
        assert_eq!(dst, RasterGrid::filled(2, 2, Color::new(1, 2, 3)));
    }

    #[test]
    fn test_max_gradient_keeps_border() {
        let border = Color::new(7, 7, 7);
        let src = RasterGrid::filled(5, 4, Color::new(50, 60, 70));
        let mut dst = RasterGrid::filled(5, 4, border);
        edge_detection_max_gradient(&mut dst, &src, 1.0).unwrap();

        for row in 0..4 {
            for col in 0..5 {
                let interior = (1..3).contains(&row) && (1..4).contains(&col);
                let expected = if interior { Color::WHITE } else { border };
                assert_eq!(dst.color(row, col).unwrap(), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_max_gradient_single_pixel() {
        let mut src = RasterGrid::filled(7, 7, Color::WHITE);
        src.set_color(3, 3, Color::BLACK).unwrap();
        let mut dst = RasterGrid::filled(7, 7, Color::WHITE);
        let edges = edge_detection_max_gradient(&mut dst, &src, 100.0).unwrap();

        assert_eq!(edges, 5);
        for (row, col) in [(3, 3), (3, 2), (3, 4), (2, 3), (4, 3)] {
            assert_eq!(dst.color(row, col).unwrap(), Color::BLACK);
        }
        assert_eq!(dst.color(2, 2).unwrap(), Color::WHITE);
        // Source untouched.
        assert_eq!(src.color(3, 2).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_max_gradient_zero_sensitivity_uses_seed() {
        let src = RasterGrid::filled(3, 3, Color::WHITE);
        let mut dst = RasterGrid::filled(3, 3, Color::WHITE);
        assert_eq!(edge_detection_max_gradient(&mut dst, &src, 0.0).unwrap(), 1);
        assert_eq!(dst.color(1, 1).unwrap(), Color::BLACK);
        assert!(GRADIENT_SEED > 0.0);
    }

    #[test]
    fn test_max_gradient_dest_too_small() {
        let src = RasterGrid::filled(6, 6, Color::WHITE);
        let mut dst = RasterGrid::filled(3, 3, Color::WHITE);
        let err = edge_detection_max_gradient(&mut dst, &src, 1.0).unwrap_err();
        assert!(err.is_bounds_error());
    }
}
