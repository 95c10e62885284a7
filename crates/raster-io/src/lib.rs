//! # raster-io
//!
//! Image file I/O for raster grids.
//!
//! Decodes files into [`RasterGrid`]s (and [`Picture`]s that remember their
//! file name) and encodes them back out:
//!
//! - **PNG** - lossless, 8/16-bit gray, gray+alpha, RGB, RGBA and palette in,
//!   8-bit RGB out
//! - **JPEG** - lossy, RGB/gray/CMYK in, RGB out with a quality setting
//!
//! Grids are RGB only, so alpha is dropped on read.
//!
//! # Architecture
//!
//! - [`ImageReader`] / [`ImageWriter`] - traits each format module implements
//! - [`read`] / [`write`] - format auto-detection
//! - [`load_picture`] / [`save_picture`] - the same for [`Picture`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use raster_io::{load_picture, save_picture};
//! use raster_ops::color::zero_blue;
//!
//! let mut beach = load_picture("beach.jpg")?;
//! zero_blue(&mut beach)?;
//! save_picture("beach_no_blue.png", &beach)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod traits;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::{ImageReader, ImageWriter};

use raster_core::{Picture, PixelGrid, RasterGrid};
use std::path::Path;
use tracing::trace;

/// Options applied by [`write_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// JPEG quality 1-100, ignored for other formats.
    pub jpeg_quality: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

/// Reads an image from a file, auto-detecting the format.
///
/// The format comes from the magic bytes, falling back to the extension.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RasterGrid> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    trace!(path = %path.display(), format = format.name(), "io::read");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(unsupported(path)),
    }
}

/// Writes a grid to a file with default options.
///
/// The format is chosen from the file extension.
pub fn write<P: AsRef<Path>>(path: P, grid: &RasterGrid) -> IoResult<()> {
    write_with_options(path, grid, &WriteOptions::default())
}

/// Writes a grid to a file, format chosen from the extension.
pub fn write_with_options<P: AsRef<Path>>(
    path: P,
    grid: &RasterGrid,
    options: &WriteOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    trace!(
        path = %path.display(),
        format = format.name(),
        width = grid.width(),
        height = grid.height(),
        "io::write"
    );

    #[cfg(not(feature = "jpeg"))]
    let _ = options;

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, grid),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => {
            let opts = jpeg::JpegWriterOptions {
                quality: options.jpeg_quality,
            };
            jpeg::JpegWriter::with_options(opts).write(path, grid)
        }

        _ => Err(unsupported(path)),
    }
}

/// Loads a picture and records the file name it came from.
pub fn load_picture<P: AsRef<Path>>(path: P) -> IoResult<Picture> {
    let path = path.as_ref();
    let grid = read(path)?;
    Ok(Picture::from_grid(grid).with_file_name(path))
}

/// Saves a picture with default options.
pub fn save_picture<P: AsRef<Path>>(path: P, picture: &Picture) -> IoResult<()> {
    write(path, picture.grid())
}

/// Saves a picture with explicit options.
pub fn save_picture_with_options<P: AsRef<Path>>(
    path: P,
    picture: &Picture,
    options: &WriteOptions,
) -> IoResult<()> {
    write_with_options(path, picture.grid(), options)
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::Color;

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let grid = RasterGrid::new(2, 2);
        let err = write(dir.path().join("out.bmp"), &grid).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ref e) if e == "bmp"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_picture_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        let mut picture = Picture::new(4, 6);
        picture.set_color(1, 2, Color::new(1, 2, 3)).unwrap();

        save_picture(&path, &picture).unwrap();
        let loaded = load_picture(&path).unwrap();
        assert_eq!(loaded.grid(), picture.grid());
        assert_eq!(loaded.file_name(), Some(path.as_path()));
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn test_jpeg_detected_by_magic() {
        let dir = tempfile::tempdir().unwrap();
        let jpg = dir.path().join("a.jpg");
        let grid = RasterGrid::filled(8, 8, Color::new(90, 90, 90));
        write_with_options(&jpg, &grid, &WriteOptions { jpeg_quality: 75 }).unwrap();

        // Rename to a misleading extension: magic bytes still win on read.
        let renamed = dir.path().join("a.png");
        std::fs::rename(&jpg, &renamed).unwrap();
        assert_eq!(read(&renamed).unwrap().dimensions(), (8, 8));
    }
}
