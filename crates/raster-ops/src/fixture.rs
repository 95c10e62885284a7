//! Windowed, color-conditional mirrors tuned to specific sample photos.
//!
//! These are regression fixtures, not general-purpose API: their windows
//! and predicates were picked by eye for one photo each (a temple, a
//! snowman, a gull on a beach). The constants are kept exactly so outputs
//! stay bit-identical.
//!
//! Each function touches only the fixed window. Running one on a grid
//! that is too small fails with an out-of-bounds error at the first cell
//! outside the grid; cells written before that point stay written.

use crate::OpsResult;
use raster_core::PixelGrid;
use tracing::{debug, trace};

/// Column the temple roof is mirrored about.
pub const TEMPLE_MIRROR_COL: usize = 276;
/// Temple window rows, `[start, end)`.
pub const TEMPLE_ROWS: (usize, usize) = (27, 97);
/// First temple column mirrored.
pub const TEMPLE_COL_START: usize = 13;

/// Row the snowman's arms are mirrored about.
pub const ARMS_MIRROR_ROW: usize = 190;
/// Only rows strictly below this are mirrored.
pub const ARMS_MIN_ROW: usize = 160;
/// Arms are pixels whose red is under this and above green.
pub const ARMS_RED_LIMIT: u8 = 200;

/// Gull window rows `[0, GULL_ROWS)`.
pub const GULL_ROWS: usize = 330;
/// Column the gull is mirrored about, also the window width.
pub const GULL_MIRROR_COL: usize = 350;
/// Only rows and columns strictly greater than this are mirrored.
pub const GULL_MIN_COORD: usize = 230;
/// Blue below this counts as gull.
pub const GULL_BLUE_LIMIT: u8 = 110;
/// Blue/red quotient below this counts as gull.
pub const GULL_RATIO_LIMIT: f64 = 1.1;

/// Mirrors part of the temple photo about column 276.
///
/// For rows 27..97 and cols 13..276,
/// `pixel[row][276 - col + 276] = pixel[row][col]`. Needs a grid at least
/// 540 wide and 97 tall. Returns the number of pixels copied.
pub fn mirror_temple<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<usize> {
    trace!(width = grid.width(), height = grid.height(), "fixture::temple");

    let mut count = 0usize;
    for row in TEMPLE_ROWS.0..TEMPLE_ROWS.1 {
        for col in TEMPLE_COL_START..TEMPLE_MIRROR_COL {
            let left = grid.color(row, col)?;
            grid.set_color(row, TEMPLE_MIRROR_COL - col + TEMPLE_MIRROR_COL, left)?;
            count += 1;
        }
    }

    debug!(count, "Mirrored temple");
    Ok(count)
}

/// Mirrors the snowman's arms downward about row 190.
///
/// Scans rows 0..190 (all columns); pixels in rows 161..190 with
/// `red > green` and `red < 200` are copied to
/// `pixel[190 + (190 - row)][col]`. Needs a grid at least 190 tall, plus
/// room below row 190 for every matching pixel. Returns the number of
/// pixels copied.
pub fn mirror_arms<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<usize> {
    let (width, height) = grid.dimensions();
    trace!(width, height, "fixture::arms");

    let mut count = 0usize;
    for row in 0..ARMS_MIRROR_ROW {
        for col in 0..width {
            let top = grid.color(row, col)?;
            if top.red > top.green && top.red < ARMS_RED_LIMIT && row > ARMS_MIN_ROW {
                grid.set_color(ARMS_MIRROR_ROW + (ARMS_MIRROR_ROW - row), col, top)?;
                count += 1;
            }
        }
    }

    debug!(count, "Mirrored arms");
    Ok(count)
}

/// Mirrors a gull to the right about column 350.
///
/// Within rows 0..330 and cols 0..350, pixels with `row > 230`, `col > 230`
/// and a gull-like color are copied to `pixel[row][350 + (350 - col)]`.
/// A color is gull-like when `blue < 110` or the integer quotient
/// `blue / red` is below 1.1. When red is 0 the quotient is undefined and
/// the ratio test is false. Needs a grid at least 350 wide and 330 tall.
/// Returns the number of pixels copied.
pub fn mirror_gull<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<usize> {
    trace!(width = grid.width(), height = grid.height(), "fixture::gull");

    let mut count = 0usize;
    for row in 0..GULL_ROWS {
        for col in 0..GULL_MIRROR_COL {
            let left = grid.color(row, col)?;
            if col > GULL_MIN_COORD && row > GULL_MIN_COORD && is_gull(left.red, left.blue) {
                grid.set_color(row, GULL_MIRROR_COL + (GULL_MIRROR_COL - col), left)?;
                count += 1;
            }
        }
    }

    debug!(count, "Mirrored gull");
    Ok(count)
}

fn is_gull(red: u8, blue: u8) -> bool {
    if blue < GULL_BLUE_LIMIT {
        return true;
    }
    match blue.checked_div(red) {
        Some(q) => (q as f64) < GULL_RATIO_LIMIT,
        None => false,
    }
}
