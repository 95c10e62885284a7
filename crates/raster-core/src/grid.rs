//! Pixel grid contract and the flat-buffer storage behind it.
//!
//! - [`PixelGrid`] - the capability every filter works against:
//!   `width`, `height`, `color`, `set_color` plus per-channel accessors
//! - [`RasterGrid`] - owned row-major RGB buffer implementing [`PixelGrid`]
//!
//! # Memory Layout
//!
//! [`RasterGrid`] stores pixels in **row-major** order, top-to-bottom,
//! three bytes per pixel:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  ← Row 0
//!         [R G B R G B R G B ...]  ← Row 1
//!         ...
//! ```
//!
//! A pixel is never a live handle into the buffer: [`PixelGrid::color`]
//! returns a [`Color`] value and [`PixelGrid::set_color`] stores one.
//!
//! # Bounds
//!
//! Every accessor checks `row < height` and `col < width` and returns
//! [`Error::OutOfBounds`] otherwise.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Color, PixelGrid, RasterGrid};
//!
//! let mut grid = RasterGrid::new(4, 3);
//! grid.set_color(2, 3, Color::new(10, 20, 30)).unwrap();
//! assert_eq!(grid.color(2, 3).unwrap().green, 20);
//! assert!(grid.color(3, 0).is_err());
//! ```

use crate::color::clamp_channel;
use crate::{Color, Error, Region, Result};

/// Number of bytes per pixel in a [`RasterGrid`].
pub const CHANNELS: usize = 3;

/// Random-access RGB pixel storage with fixed dimensions.
///
/// Implementors provide the four required methods; channel accessors are
/// derived from them. Per-channel setters take an `i32` and clamp it into
/// [0, 255], so filters may hand over unbounded intermediate results.
pub trait PixelGrid {
    /// Grid width in pixels (number of columns).
    fn width(&self) -> usize;

    /// Grid height in pixels (number of rows).
    fn height(&self) -> usize;

    /// Returns the color at `[row][col]`.
    fn color(&self, row: usize, col: usize) -> Result<Color>;

    /// Replaces the color at `[row][col]`.
    fn set_color(&mut self, row: usize, col: usize, color: Color) -> Result<()>;

    /// Returns `(width, height)`.
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Region covering the whole grid.
    #[inline]
    fn bounds(&self) -> Region {
        Region::from_size(self.width(), self.height())
    }

    /// Returns `true` if `[row][col]` is a valid index.
    #[inline]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width()
    }

    /// Red channel at `[row][col]`.
    fn red(&self, row: usize, col: usize) -> Result<u8> {
        Ok(self.color(row, col)?.red)
    }

    /// Green channel at `[row][col]`.
    fn green(&self, row: usize, col: usize) -> Result<u8> {
        Ok(self.color(row, col)?.green)
    }

    /// Blue channel at `[row][col]`.
    fn blue(&self, row: usize, col: usize) -> Result<u8> {
        Ok(self.color(row, col)?.blue)
    }

    /// Sets the red channel, clamping `value` into [0, 255].
    fn set_red(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let mut c = self.color(row, col)?;
        c.red = clamp_channel(value);
        self.set_color(row, col, c)
    }

    /// Sets the green channel, clamping `value` into [0, 255].
    fn set_green(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let mut c = self.color(row, col)?;
        c.green = clamp_channel(value);
        self.set_color(row, col, c)
    }

    /// Sets the blue channel, clamping `value` into [0, 255].
    fn set_blue(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let mut c = self.color(row, col)?;
        c.blue = clamp_channel(value);
        self.set_color(row, col, c)
    }
}

/// Owned RGB pixel buffer.
///
/// # Example
///
/// ```rust
/// use raster_core::{Color, PixelGrid, RasterGrid};
///
/// let white = RasterGrid::filled(100, 50, Color::WHITE);
/// assert_eq!(white.dimensions(), (100, 50));
/// assert_eq!(white.color(49, 99).unwrap(), Color::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RasterGrid {
    /// Pixel data, `width * height * CHANNELS` bytes
    data: Vec<u8>,
    /// Width in pixels
    width: usize,
    /// Height in pixels
    height: usize,
}

impl RasterGrid {
    /// Creates a black grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height * CHANNELS],
            width,
            height,
        }
    }

    /// Creates a grid filled with one color.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let mut grid = Self::new(width, height);
        grid.fill(color);
        grid
    }

    /// Creates a grid whose pixel at `[row][col]` is `f(row, col)`.
    ///
    /// ```rust
    /// use raster_core::{Color, PixelGrid, RasterGrid};
    ///
    /// let g = RasterGrid::from_fn(4, 2, |row, col| Color::new(col as u8, row as u8, 0));
    /// assert_eq!(g.color(1, 3).unwrap(), Color::new(3, 1, 0));
    /// ```
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for row in 0..height {
            for col in 0..width {
                data.extend_from_slice(&f(row, col).to_array());
            }
        }
        Self { data, width, height }
    }

    /// Creates a grid from existing RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflow"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, width, height })
    }

    /// Returns the raw RGB bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGB bytes mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the grid, returning its RGB bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns `true` if the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Byte offset of `[row][col]`, or an error if out of range.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok((row * self.width + col) * CHANNELS)
        } else {
            Err(Error::out_of_bounds(row, col, self.width, self.height))
        }
    }

    /// Fills the whole grid with one color.
    pub fn fill(&mut self, color: Color) {
        let rgb = color.to_array();
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Returns one row of RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row >= height`.
    pub fn row(&self, row: usize) -> Result<&[u8]> {
        if row >= self.height {
            return Err(Error::out_of_bounds(row, 0, self.width, self.height));
        }
        let start = row * self.width * CHANNELS;
        Ok(&self.data[start..start + self.width * CHANNELS])
    }

    /// Returns one row of RGB bytes mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row >= height`.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [u8]> {
        if row >= self.height {
            return Err(Error::out_of_bounds(row, 0, self.width, self.height));
        }
        let start = row * self.width * CHANNELS;
        let len = self.width * CHANNELS;
        Ok(&mut self.data[start..start + len])
    }

    /// Parallel iterator over mutable rows.
    #[cfg(feature = "rayon")]
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, u8> {
        use rayon::prelude::*;
        // Zero-width grids have no data, so any non-zero chunk size yields nothing.
        let row_len = (self.width * CHANNELS).max(1);
        self.data.par_chunks_mut(row_len)
    }
}

impl PixelGrid for RasterGrid {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn color(&self, row: usize, col: usize) -> Result<Color> {
        let o = self.offset(row, col)?;
        Ok(Color::new(self.data[o], self.data[o + 1], self.data[o + 2]))
    }

    #[inline]
    fn set_color(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let o = self.offset(row, col)?;
        self.data[o..o + CHANNELS].copy_from_slice(&color.to_array());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let grid = RasterGrid::new(3, 2);
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.data().len(), 18);
        assert!(grid.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_get_set() {
        let mut grid = RasterGrid::new(5, 4);
        grid.set_color(3, 4, Color::new(1, 2, 3)).unwrap();
        assert_eq!(grid.color(3, 4).unwrap(), Color::new(1, 2, 3));
        // Row-major offset: (3 * 5 + 4) * 3
        assert_eq!(&grid.data()[57..60], &[1, 2, 3]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = RasterGrid::new(5, 4);
        let err = grid.color(4, 0).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(grid.set_color(0, 5, Color::WHITE).is_err());
        assert!(grid.set_red(10, 10, 0).is_err());
        assert!(grid.row(4).is_err());
    }

    #[test]
    fn test_channel_setters_clamp() {
        let mut grid = RasterGrid::new(1, 1);
        grid.set_red(0, 0, 4 * 200).unwrap();
        grid.set_green(0, 0, -40).unwrap();
        grid.set_blue(0, 0, 77).unwrap();
        assert_eq!(grid.color(0, 0).unwrap(), Color::new(255, 0, 77));
        assert_eq!(grid.red(0, 0).unwrap(), 255);
        assert_eq!(grid.green(0, 0).unwrap(), 0);
        assert_eq!(grid.blue(0, 0).unwrap(), 77);
    }

    #[test]
    fn test_from_data_length_check() {
        assert!(RasterGrid::from_data(2, 2, vec![0; 12]).is_ok());
        let err = RasterGrid::from_data(2, 2, vec![0; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes"));
    }

    #[test]
    fn test_rows() {
        let grid = RasterGrid::from_fn(2, 2, |row, col| Color::new(row as u8, col as u8, 9));
        assert_eq!(grid.row(1).unwrap(), &[1, 0, 9, 1, 1, 9]);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = RasterGrid::filled(2, 2, Color::WHITE);
        let mut b = a.clone();
        b.set_color(0, 0, Color::BLACK).unwrap();
        assert_eq!(a.color(0, 0).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_zero_size() {
        let grid = RasterGrid::new(0, 7);
        assert!(grid.is_empty());
        assert_eq!(grid.pixel_count(), 0);
        assert!(grid.color(0, 0).is_err());
    }
}
