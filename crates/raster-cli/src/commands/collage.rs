//! Collage command - the fixed flower and beach layouts

use super::RunOptions;
use crate::{BeachArgs, CollageCommand, FlowersArgs};
use anyhow::{Result, bail};
use raster_core::Picture;
use raster_ops::collage::{create_collage, my_collage};

/// Beach collage canvas size.
const BEACH_WIDTH: usize = 640;
const BEACH_HEIGHT: usize = 480;

pub fn run(cmd: CollageCommand, opts: &RunOptions) -> Result<()> {
    match cmd {
        CollageCommand::Flowers(args) => flowers(args, opts),
        CollageCommand::Beach(args) => beach(args, opts),
    }
}

fn flowers(args: FlowersArgs, opts: &RunOptions) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("Canvas must be non-empty, got {}x{}", args.width, args.height);
    }

    let flower1 = super::load_picture(&args.flower1)?;
    let flower2 = super::load_picture(&args.flower2)?;

    let mut canvas = Picture::new(args.height, args.width);
    create_collage(&mut canvas, &flower1, &flower2)?;

    super::save_picture(&args.output, &canvas, opts)
}

fn beach(args: BeachArgs, opts: &RunOptions) -> Result<()> {
    let beach = super::load_picture(&args.beach)?;

    let mut canvas = Picture::new(BEACH_HEIGHT, BEACH_WIDTH);
    my_collage(&mut canvas, &beach)?;

    super::save_picture(&args.output, &canvas, opts)
}
