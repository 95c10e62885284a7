//! Filter command - apply one per-pixel color transform

use super::RunOptions;
use crate::FilterArgs;
use anyhow::Result;
use raster_ops::{color, parallel};
use tracing::debug;

pub fn run(args: FilterArgs, opts: &RunOptions) -> Result<()> {
    let mut picture = super::load_picture(&args.input)?;
    debug!(op = %args.op, sequential = args.sequential, "Filtering");

    if args.sequential {
        color::apply_color_op(&mut picture, args.op)?;
    } else {
        parallel::apply_color_op(picture.grid_mut(), args.op)?;
    }

    super::save_picture(&args.output, &picture, opts)
}
