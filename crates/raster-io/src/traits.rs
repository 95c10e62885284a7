//! Reader and writer traits implemented by each format module.

use crate::IoResult;
use raster_core::RasterGrid;
use std::path::Path;

/// Decodes a format into a [`RasterGrid`].
pub trait ImageReader {
    /// Reads an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<RasterGrid>;

    /// Reads an image from an in-memory encoded buffer.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<RasterGrid>;
}

/// Encodes a [`RasterGrid`] into a format.
pub trait ImageWriter {
    /// Writes an image to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, grid: &RasterGrid) -> IoResult<()> {
        let data = self.write_to_memory(grid)?;
        std::fs::write(path.as_ref(), data)?;
        Ok(())
    }

    /// Encodes an image into a byte vector.
    fn write_to_memory(&self, grid: &RasterGrid) -> IoResult<Vec<u8>>;
}
