//! Edges command - binary edge detection

use super::RunOptions;
use crate::EdgesArgs;
use anyhow::{Result, bail};
use raster_ops::edge::{edge_detection, edge_detection_max_gradient};

pub fn run(args: EdgesArgs, opts: &RunOptions) -> Result<()> {
    if !args.threshold.is_finite() || args.threshold < 0.0 {
        bail!("Threshold must be a non-negative number, got {}", args.threshold);
    }

    let mut picture = super::load_picture(&args.input)?;

    let edges = if args.max_gradient {
        // The destination starts as a copy, so its one-pixel border keeps
        // the input colors.
        let source = picture.clone();
        edge_detection_max_gradient(&mut picture, &source, args.threshold)?
    } else {
        edge_detection(&mut picture, args.threshold)?
    };
    if opts.verbose > 0 {
        println!("Edge pixels: {}", edges);
    }

    super::save_picture(&args.output, &picture, opts)
}
