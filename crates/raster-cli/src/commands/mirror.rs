//! Mirror command - plain axis mirrors and the fixture windows

use super::RunOptions;
use crate::{MirrorArgs, MirrorMode};
use anyhow::Result;
use raster_core::Picture;
use raster_ops::{fixture, mirror, parallel, OpsResult};
use tracing::{debug, info};

pub fn run(args: MirrorArgs, opts: &RunOptions) -> Result<()> {
    let mut picture = super::load_picture(&args.input)?;
    debug!(mode = ?args.mode, "Mirroring");

    if let Some(count) = apply(&mut picture, args.mode, args.sequential)? {
        info!(count, "Fixture pixels copied");
        if opts.verbose > 0 {
            println!("Copied {} pixels", count);
        }
    }

    super::save_picture(&args.output, &picture, opts)
}

/// Runs one mirror mode. Fixture modes return how many pixels they copied.
fn apply(picture: &mut Picture, mode: MirrorMode, sequential: bool) -> OpsResult<Option<usize>> {
    match mode {
        MirrorMode::Vertical if sequential => mirror::mirror_vertical(picture)?,
        MirrorMode::Vertical => parallel::mirror_vertical(picture.grid_mut())?,
        MirrorMode::VerticalRtl if sequential => mirror::mirror_vertical_right_to_left(picture)?,
        MirrorMode::VerticalRtl => parallel::mirror_vertical_right_to_left(picture.grid_mut())?,
        MirrorMode::Horizontal => mirror::mirror_horizontal(picture)?,
        MirrorMode::HorizontalBtt => mirror::mirror_horizontal_bottom_to_top(picture)?,
        MirrorMode::Diagonal => mirror::mirror_diagonal(picture)?,
        MirrorMode::Temple => return fixture::mirror_temple(picture).map(Some),
        MirrorMode::Arms => return fixture::mirror_arms(picture).map(Some),
        MirrorMode::Gull => return fixture::mirror_gull(picture).map(Some),
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::{Color, PixelGrid, RasterGrid};

    #[test]
    fn test_parallel_and_sequential_agree() {
        let grid = RasterGrid::from_fn(9, 4, |row, col| Color::new(col as u8, row as u8, 3));
        for mode in [MirrorMode::Vertical, MirrorMode::VerticalRtl] {
            let mut a = Picture::from_grid(grid.clone());
            let mut b = Picture::from_grid(grid.clone());
            assert_eq!(apply(&mut a, mode, true).unwrap(), None);
            apply(&mut b, mode, false).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fixture_on_small_picture_fails() {
        let mut picture = Picture::new(10, 10);
        let err = apply(&mut picture, MirrorMode::Temple, true).unwrap_err();
        assert!(err.is_bounds_error());
        assert_eq!(picture.color(0, 0).unwrap(), Color::WHITE);
    }
}
