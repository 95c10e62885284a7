//! Collages assembled from copies of a few source grids.
//!
//! The layouts are fixed. [`create_collage`] stacks flower tiles down the
//! left edge in 100-row steps and mirrors the result; [`my_collage`] splits
//! a 640x480 canvas into four quadrants, each showing a differently
//! filtered copy of the same photo.

use crate::OpsResult;
use crate::color::{grayscale, negate, zero_blue};
use crate::composite::{copy, partial_copy_region};
use crate::mirror::{mirror_diagonal, mirror_vertical};
use raster_core::{PixelGrid, Region};
use tracing::{debug, trace};

/// Row step between flower tiles in [`create_collage`].
pub const FLOWER_STEP: usize = 100;

/// Quadrants of [`my_collage`]: each source region lands at its own
/// top-left corner, in order zero-blue, diagonal, negate, grayscale.
pub const BEACH_QUADRANTS: [Region; 4] = [
    Region::new(0, 0, 240, 320),
    Region::new(0, 320, 240, 640),
    Region::new(240, 0, 480, 320),
    Region::new(240, 320, 480, 640),
];

/// Builds the flower collage into `dest`.
///
/// Tiles, top to bottom at column 0: `flower1`, `flower2`, `flower1`,
/// `flower2` with blue zeroed, `flower1`, `flower2`. Each tile starts
/// [`FLOWER_STEP`] rows below the previous one and is truncated at the
/// destination edge. Finally the left half of `dest` is mirrored onto the
/// right half.
pub fn create_collage<D, S>(dest: &mut D, flower1: &S, flower2: &S) -> OpsResult<()>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + Clone,
{
    trace!(width = dest.width(), height = dest.height(), "collage::flowers");

    let mut no_blue = flower2.clone();
    zero_blue(&mut no_blue)?;

    let tiles: [&S; 6] = [flower1, flower2, flower1, &no_blue, flower1, flower2];
    let mut copied = 0usize;
    for (i, tile) in tiles.into_iter().enumerate() {
        copied += copy(dest, tile, i * FLOWER_STEP, 0)?;
    }
    mirror_vertical(dest)?;

    debug!(copied, "Built flower collage");
    Ok(())
}

/// Builds the four-quadrant beach collage into `dest`.
///
/// Four copies of `beach` are filtered (zero-blue, diagonal mirror,
/// negate, grayscale) and the matching quadrant of each is pasted at the
/// same position in `dest`, following [`BEACH_QUADRANTS`]. `beach` must be
/// at least 640x480; a smaller `dest` truncates.
pub fn my_collage<D, S>(dest: &mut D, beach: &S) -> OpsResult<()>
where
    D: PixelGrid + ?Sized,
    S: PixelGrid + Clone,
{
    trace!(width = dest.width(), height = dest.height(), "collage::beach");

    let mut top_left = beach.clone();
    zero_blue(&mut top_left)?;
    let mut top_right = beach.clone();
    mirror_diagonal(&mut top_right)?;
    let mut bottom_left = beach.clone();
    negate(&mut bottom_left)?;
    let mut bottom_right = beach.clone();
    grayscale(&mut bottom_right)?;

    let variants = [&top_left, &top_right, &bottom_left, &bottom_right];
    let mut copied = 0usize;
    for (variant, region) in variants.into_iter().zip(BEACH_QUADRANTS) {
        copied += partial_copy_region(dest, variant, region, region.row_start, region.col_start)?;
    }

    debug!(copied, "Built beach collage");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{grayscale_pixel, negate_pixel, zero_blue_pixel};
    use raster_core::{Color, Picture, RasterGrid};

    #[test]
    fn test_flower_collage_layout() {
        let flower1 = RasterGrid::filled(50, 100, Color::new(200, 10, 30));
        let flower2 = RasterGrid::filled(50, 100, Color::new(20, 180, 90));
        let mut dest = RasterGrid::filled(200, 650, Color::WHITE);
        create_collage(&mut dest, &flower1, &flower2).unwrap();

        let expected_tiles = [
            Color::new(200, 10, 30),
            Color::new(20, 180, 90),
            Color::new(200, 10, 30),
            Color::new(20, 180, 0),
            Color::new(200, 10, 30),
            Color::new(20, 180, 90),
        ];
        for (i, expected) in expected_tiles.into_iter().enumerate() {
            let row = i * FLOWER_STEP + 10;
            assert_eq!(dest.color(row, 0).unwrap(), expected);
            // Mirrored onto the right edge.
            assert_eq!(dest.color(row, 199).unwrap(), expected);
            // Between the tiles and their mirror nothing was copied.
            assert_eq!(dest.color(row, 100).unwrap(), Color::WHITE);
        }
        assert_eq!(dest.color(620, 0).unwrap(), Color::WHITE);
        // Inputs are untouched.
        assert_eq!(flower2.color(0, 0).unwrap(), Color::new(20, 180, 90));
    }

    #[test]
    fn test_flower_collage_truncates() {
        let flower = Picture::from_grid(RasterGrid::filled(50, 100, Color::BLACK));
        let mut dest = Picture::new(250, 100);
        create_collage(&mut dest, &flower, &flower).unwrap();
        assert_eq!(dest.color(249, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_beach_quadrants() {
        let beach = RasterGrid::from_fn(640, 480, |row, col| {
            Color::new((col % 200) as u8, (row % 200) as u8, 120)
        });
        let mut dest = RasterGrid::new(640, 480);
        my_collage(&mut dest, &beach).unwrap();

        let at = |row: usize, col: usize| beach.color(row, col).unwrap();
        assert_eq!(dest.color(10, 20).unwrap(), zero_blue_pixel(at(10, 20)));
        // Top right comes from the diagonally mirrored copy.
        assert_eq!(dest.color(10, 400).unwrap(), at(400, 10));
        assert_eq!(dest.color(200, 330).unwrap(), at(330, 200));
        // Columns past the shorter side have no transpose partner.
        assert_eq!(dest.color(10, 600).unwrap(), at(10, 600));
        assert_eq!(dest.color(300, 5).unwrap(), negate_pixel(at(300, 5)));
        assert_eq!(dest.color(479, 639).unwrap(), grayscale_pixel(at(479, 639)));
    }

    #[test]
    fn test_beach_too_small() {
        let beach = RasterGrid::filled(100, 100, Color::WHITE);
        let mut dest = RasterGrid::new(640, 480);
        let err = my_collage(&mut dest, &beach).unwrap_err();
        assert!(err.is_bounds_error());
    }
}
