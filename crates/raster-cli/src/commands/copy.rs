//! Copy command - overlay a foreground image (or a rectangle of it) onto a background

use super::RunOptions;
use crate::CopyArgs;
use anyhow::Result;
use raster_core::{Error, PixelGrid};
use raster_ops::composite::{copy, partial_copy_region};
use tracing::info;

pub fn run(args: CopyArgs, opts: &RunOptions) -> Result<()> {
    let mut bg = super::load_picture(&args.background)?;
    let fg = super::load_picture(&args.foreground)?;

    let count = match args.region {
        Some(region) => {
            // The whole rectangle must lie inside the foreground.
            let (width, height) = fg.dimensions();
            if !region.fits(width, height) {
                return Err(Error::invalid_region(region, width, height).into());
            }
            partial_copy_region(&mut bg, &fg, region, args.row, args.col)?
        }
        None => copy(&mut bg, &fg, args.row, args.col)?,
    };
    info!(count, row = args.row, col = args.col, "Copied pixels");
    if opts.verbose > 0 {
        println!("Copied {} pixels to ({}, {})", count, args.row, args.col);
    }

    super::save_picture(&args.output, &bg, opts)
}
