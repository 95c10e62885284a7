//! JPEG format support.
//!
//! Reading handles RGB, 8-bit and 16-bit grayscale and CMYK input and always
//! yields RGB. Writing encodes RGB at a configurable quality (default 90).
//! JPEG is lossy: a write/read round trip keeps the dimensions but not the
//! exact pixel values.
//!
//! # Example
//!
//! ```rust,ignore
//! use raster_io::jpeg::{JpegWriter, JpegWriterOptions};
//! use raster_io::ImageWriter;
//!
//! let writer = JpegWriter::with_options(JpegWriterOptions { quality: 95 });
//! writer.write("highq.jpg", &grid)?;
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult};
use raster_core::{PixelGrid, RasterGrid};
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use tracing::debug;

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// Options for writing JPEG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

// ============================================================================
// JpegReader
// ============================================================================

/// JPEG decoder into [`RasterGrid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegReader;

impl JpegReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }

    fn read_impl<R: Read>(&self, reader: R) -> IoResult<RasterGrid> {
        let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(reader));
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;
        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        let width = info.width as usize;
        let height = info.height as usize;

        let rgb: Vec<u8> = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels,
            jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
            // Big-endian samples; keep the high byte.
            jpeg_decoder::PixelFormat::L16 => pixels
                .chunks_exact(2)
                .flat_map(|l| [l[0], l[0], l[0]])
                .collect(),
            jpeg_decoder::PixelFormat::CMYK32 => {
                pixels.chunks_exact(4).flat_map(cmyk_to_rgb).collect()
            }
        };

        debug!(width, height, format = ?info.pixel_format, "Decoded JPEG");
        Ok(RasterGrid::from_data(width, height, rgb)?)
    }
}

/// Approximate CMYK to RGB conversion, no color management.
fn cmyk_to_rgb(cmyk: &[u8]) -> [u8; 3] {
    let k = 1.0 - cmyk[3] as f32 / 255.0;
    let channel = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0) as u8;
    [channel(cmyk[0]), channel(cmyk[1]), channel(cmyk[2])]
}

impl ImageReader for JpegReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<RasterGrid> {
        let data = std::fs::read(path.as_ref())?;
        self.read_impl(Cursor::new(data))
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<RasterGrid> {
        self.read_impl(Cursor::new(data))
    }
}

// ============================================================================
// JpegWriter
// ============================================================================

/// JPEG encoder for [`RasterGrid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegWriter {
    options: JpegWriterOptions,
}

impl JpegWriter {
    /// Creates a new writer with default options (quality 90).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with custom options.
    pub fn with_options(options: JpegWriterOptions) -> Self {
        Self { options }
    }

    /// Current options.
    pub fn options(&self) -> JpegWriterOptions {
        self.options
    }
}

impl ImageWriter for JpegWriter {
    fn write_to_memory(&self, grid: &RasterGrid) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType, Encoder};

        let (width, height) = grid.dimensions();
        let w = u16::try_from(width)
            .map_err(|_| IoError::EncodeError(format!("width {} exceeds JPEG limit", width)))?;
        let h = u16::try_from(height)
            .map_err(|_| IoError::EncodeError(format!("height {} exceeds JPEG limit", height)))?;
        let quality = self.options.quality.clamp(1, 100);

        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, quality);
        encoder
            .encode(grid.data(), w, h, ColorType::Rgb)
            .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

        debug!(width, height, quality, bytes = buffer.len(), "Encoded JPEG");
        Ok(buffer)
    }
}

/// Reads a JPEG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RasterGrid> {
    JpegReader::new().read(path)
}

/// Writes a JPEG file with default options (quality 90).
pub fn write<P: AsRef<Path>>(path: P, grid: &RasterGrid) -> IoResult<()> {
    JpegWriter::new().write(path, grid)
}
