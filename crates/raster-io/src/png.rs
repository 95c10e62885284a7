//! PNG format support.
//!
//! Reading accepts 8-bit and 16-bit grayscale, gray+alpha, RGB, RGBA and
//! palette images. Everything is normalized to 8-bit RGB: 16-bit samples
//! keep their high byte, gray is replicated into all three channels and
//! alpha is dropped. Writing always produces 8-bit RGB, so a write/read
//! round trip is lossless.
//!
//! # Example
//!
//! ```rust,ignore
//! use raster_io::png;
//!
//! let grid = png::read("input.png")?;
//! png::write("output.png", &grid)?;
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult};
use raster_core::{PixelGrid, RasterGrid, CHANNELS};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::debug;

/// PNG decoder into [`RasterGrid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PngReader;

impl PngReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }

    fn read_impl<R: BufRead + Seek>(&self, reader: R) -> IoResult<RasterGrid> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let width = info.width as usize;
        let height = info.height as usize;
        let samples = &buf[..info.buffer_size()];

        let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
            (png::ColorType::Rgb, png::BitDepth::Eight) => samples.to_vec(),
            (png::ColorType::Rgba, png::BitDepth::Eight) => samples
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            (png::ColorType::Grayscale, png::BitDepth::Eight) => {
                samples.iter().flat_map(|&g| [g, g, g]).collect()
            }
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => samples
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0]])
                .collect(),
            (color_type, bit_depth) => {
                return Err(IoError::UnsupportedBitDepth(format!(
                    "{:?} {:?}",
                    color_type, bit_depth
                )));
            }
        };

        debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
        Ok(RasterGrid::from_data(width, height, rgb)?)
    }
}

impl ImageReader for PngReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<RasterGrid> {
        let file = File::open(path.as_ref())?;
        self.read_impl(BufReader::new(file))
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<RasterGrid> {
        self.read_impl(Cursor::new(data))
    }
}

/// PNG encoder for [`RasterGrid`]. Output is 8-bit RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngWriter;

impl PngWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self
    }
}

impl ImageWriter for PngWriter {
    fn write_to_memory(&self, grid: &RasterGrid) -> IoResult<Vec<u8>> {
        let (width, height) = grid.dimensions();
        let w = u32::try_from(width)
            .map_err(|_| IoError::EncodeError(format!("width {} too large for PNG", width)))?;
        let h = u32::try_from(height)
            .map_err(|_| IoError::EncodeError(format!("height {} too large for PNG", height)))?;

        let mut buffer = Vec::with_capacity(width * height * CHANNELS);
        {
            let mut encoder = png::Encoder::new(&mut buffer, w, h);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::default());

            let mut writer = encoder
                .write_header()
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(grid.data())
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
        }

        debug!(width, height, bytes = buffer.len(), "Encoded PNG");
        Ok(buffer)
    }
}

/// Reads a PNG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RasterGrid> {
    PngReader::new().read(path)
}

/// Writes a grid to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, grid: &RasterGrid) -> IoResult<()> {
    PngWriter::new().write(path, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::Color;

    fn gradient(width: usize, height: usize) -> RasterGrid {
        RasterGrid::from_fn(width, height, |row, col| {
            Color::new((col * 8) as u8, (row * 8) as u8, 128)
        })
    }

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_roundtrip_rgb() {
        let grid = gradient(32, 20);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        write(&path, &grid).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_memory_roundtrip() {
        let grid = gradient(7, 3);
        let bytes = PngWriter::new().write_to_memory(&grid).unwrap();
        assert_eq!(PngReader::new().read_from_memory(&bytes).unwrap(), grid);
    }

    #[test]
    fn test_read_rgba_drops_alpha() {
        let data = [10, 20, 30, 0, 40, 50, 60, 255];
        let bytes = encode_raw(2, 1, png::ColorType::Rgba, &data);
        let grid = PngReader::new().read_from_memory(&bytes).unwrap();
        assert_eq!(grid.color(0, 0).unwrap(), Color::new(10, 20, 30));
        assert_eq!(grid.color(0, 1).unwrap(), Color::new(40, 50, 60));
    }

    #[test]
    fn test_read_gray() {
        let bytes = encode_raw(3, 1, png::ColorType::Grayscale, &[0, 128, 255]);
        let grid = PngReader::new().read_from_memory(&bytes).unwrap();
        assert_eq!(grid.color(0, 1).unwrap(), Color::new(128, 128, 128));

        let bytes = encode_raw(1, 1, png::ColorType::GrayscaleAlpha, &[77, 9]);
        let grid = PngReader::new().read_from_memory(&bytes).unwrap();
        assert_eq!(grid.color(0, 0).unwrap(), Color::new(77, 77, 77));
    }

    #[test]
    fn test_read_garbage() {
        let err = PngReader::new().read_from_memory(b"not a png").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
