//! Image info command.
//!
//! Prints dimensions, format and file size for each input.

use super::RunOptions;
use crate::InfoArgs;
use anyhow::Result;
use raster_core::{Picture, PixelGrid};
use raster_io::Format;
use std::fs;

/// Runs the info command.
pub fn run(args: InfoArgs, opts: &RunOptions) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)?.len();
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let picture = super::load_picture(path)?;

        println!("{}", path.display());
        println!("  Resolution: {}x{}", picture.width(), picture.height());
        println!("  Pixels:     {}", picture.grid().pixel_count());
        println!("  File size:  {}", super::format_size(file_size));
        if opts.verbose > 0 {
            println!("  Format:     {}", format.name());
            println!("  {}", picture);
        }

        if args.stats {
            let [r, g, b] = channel_means(&picture);
            println!("  Mean RGB:   {:.2}, {:.2}, {:.2}", r, g, b);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Per-channel mean over every pixel, zeros for an empty picture.
fn channel_means(picture: &Picture) -> [f64; 3] {
    let count = picture.grid().pixel_count();
    if count == 0 {
        return [0.0; 3];
    }

    let mut sums = [0u64; 3];
    for px in picture.grid().data().chunks_exact(3) {
        for (sum, &v) in sums.iter_mut().zip(px) {
            *sum += v as u64;
        }
    }
    sums.map(|s| s as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::{Color, RasterGrid};

    #[test]
    fn test_channel_means() {
        let mut grid = RasterGrid::filled(2, 1, Color::new(10, 0, 255));
        grid.set_color(0, 1, Color::new(20, 0, 255)).unwrap();
        let means = channel_means(&Picture::from_grid(grid));
        assert_eq!(means, [15.0, 0.0, 255.0]);

        assert_eq!(channel_means(&Picture::from_grid(RasterGrid::new(0, 0))), [0.0; 3]);
    }
}
