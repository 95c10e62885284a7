//! Demo command - load, zero the blue channel, save

use super::RunOptions;
use crate::DemoArgs;
use anyhow::Result;
use raster_ops::color::zero_blue;

pub fn run(args: DemoArgs, opts: &RunOptions) -> Result<()> {
    let mut picture = super::load_picture(&args.input)?;
    if opts.verbose > 0 {
        println!("{}", picture);
    }

    zero_blue(&mut picture)?;
    super::save_picture(&args.output, &picture, opts)
}
