//! Region copy between grids.
//!
//! Both operations overlay a source grid (or part of it) onto a destination
//! grid starting at a destination offset. They never resize anything: the
//! copy stops on each axis at whichever bound is reached first.
//!
//! - [`copy`] - whole source at `(dest_row, dest_col)`
//! - [`partial_copy`] - source sub-rectangle at `(dest_row, dest_col)`
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelGrid, RasterGrid};
//! use raster_ops::composite::copy;
//!
//! let mut bg = RasterGrid::filled(10, 10, Color::WHITE);
//! let fg = RasterGrid::filled(3, 3, Color::BLACK);
//! copy(&mut bg, &fg, 8, 8).unwrap();
//! assert_eq!(bg.color(9, 9).unwrap(), Color::BLACK);
//! ```

use crate::OpsResult;
use raster_core::{PixelGrid, Region};
use tracing::{debug, trace};

/// Copies all of `source` into `dest` with its top-left cell at
/// `(dest_row, dest_col)`.
///
/// Rows and columns that would land past the destination edge are skipped.
/// An offset past the destination, or an empty source, copies nothing.
/// Returns the number of pixels written.
pub fn copy<D, S>(dest: &mut D, source: &S, dest_row: usize, dest_col: usize) -> OpsResult<usize>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + ?Sized,
{
    trace!(
        src_w = source.width(),
        src_h = source.height(),
        dst_w = dest.width(),
        dst_h = dest.height(),
        dest_row,
        dest_col,
        "composite::copy"
    );

    let region = Region::from_size(source.width(), source.height());
    let count = copy_region(dest, source, region, dest_row, dest_col)?;
    debug!(count, "Copied grid");
    Ok(count)
}

/// Copies the source rectangle `[src_row_start, src_row_end) x
/// [src_col_start, src_col_end)` into `dest` at `(dest_row, dest_col)`.
///
/// Truncated against the destination like [`copy`]. The end values are not
/// clipped to the source: a rectangle reaching past the source fails with
/// an out-of-bounds error at the first missing cell, after the cells
/// before it were written. An empty rectangle copies nothing.
#[allow(clippy::too_many_arguments)]
pub fn partial_copy<D, S>(
    dest: &mut D,
    source: &S,
    src_row_start: usize,
    src_col_start: usize,
    src_row_end: usize,
    src_col_end: usize,
    dest_row: usize,
    dest_col: usize,
) -> OpsResult<usize>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + ?Sized,
{
    let region = Region::new(src_row_start, src_col_start, src_row_end, src_col_end);
    partial_copy_region(dest, source, region, dest_row, dest_col)
}

/// [`partial_copy`] taking the source rectangle as a [`Region`].
pub fn partial_copy_region<D, S>(
    dest: &mut D,
    source: &S,
    region: Region,
    dest_row: usize,
    dest_col: usize,
) -> OpsResult<usize>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + ?Sized,
{
    trace!(
        ?region,
        dst_w = dest.width(),
        dst_h = dest.height(),
        dest_row,
        dest_col,
        "composite::partial_copy"
    );

    let count = copy_region(dest, source, region, dest_row, dest_col)?;
    debug!(count, "Copied region");
    Ok(count)
}

/// Walks `region` of the source alongside the destination from
/// `(dest_row, dest_col)`, stopping per axis at the region end or the
/// destination edge.
fn copy_region<D, S>(
    dest: &mut D,
    source: &S,
    region: Region,
    dest_row: usize,
    dest_col: usize,
) -> OpsResult<usize>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + ?Sized,
{
    let (dst_w, dst_h) = dest.dimensions();
    let mut count = 0usize;

    let rows = (region.row_start..region.row_end).zip(dest_row..dst_h);
    for (from_row, to_row) in rows {
        let cols = (region.col_start..region.col_end).zip(dest_col..dst_w);
        for (from_col, to_col) in cols {
            let c = source.color(from_row, from_col)?;
            dest.set_color(to_row, to_col, c)?;
            count += 1;
        }
    }
    Ok(count)
}
