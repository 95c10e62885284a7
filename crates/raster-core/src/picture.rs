//! Picture: a pixel grid plus the metadata it was loaded with.
//!
//! A [`Picture`] owns exactly one [`RasterGrid`]. Cloning a picture clones
//! the grid, so the copy can be filtered without touching the original.
//! Loading from and saving to files lives in `raster-io`.

use crate::{Color, PixelGrid, RasterGrid, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Width of [`Picture::default`].
pub const DEFAULT_WIDTH: usize = 200;

/// Height of [`Picture::default`].
pub const DEFAULT_HEIGHT: usize = 100;

/// An owned picture.
///
/// # Example
///
/// ```rust
/// use raster_core::{Color, Picture, PixelGrid};
///
/// let pic = Picture::new(480, 640);
/// assert_eq!(pic.height(), 480);
/// assert_eq!(pic.width(), 640);
/// assert_eq!(pic.color(0, 0).unwrap(), Color::WHITE);
/// assert_eq!(pic.to_string(), "Picture, filename None height 480 width 640");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    grid: RasterGrid,
    file_name: Option<PathBuf>,
}

impl Picture {
    /// Creates an all-white picture. Note the (height, width) argument order.
    pub fn new(height: usize, width: usize) -> Self {
        Self::from_grid(RasterGrid::filled(width, height, Color::WHITE))
    }

    /// Wraps an existing grid.
    pub fn from_grid(grid: RasterGrid) -> Self {
        Self {
            grid,
            file_name: None,
        }
    }

    /// Sets the file name this picture was loaded from.
    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    /// File name the picture was loaded from, if any.
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Read access to the pixel grid.
    pub fn grid(&self) -> &RasterGrid {
        &self.grid
    }

    /// Write access to the pixel grid.
    pub fn grid_mut(&mut self) -> &mut RasterGrid {
        &mut self.grid
    }

    /// Consumes the picture, returning its grid.
    pub fn into_grid(self) -> RasterGrid {
        self.grid
    }
}

impl Default for Picture {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl From<RasterGrid> for Picture {
    fn from(grid: RasterGrid) -> Self {
        Self::from_grid(grid)
    }
}

impl PixelGrid for Picture {
    #[inline]
    fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    fn color(&self, row: usize, col: usize) -> Result<Color> {
        self.grid.color(row, col)
    }

    #[inline]
    fn set_color(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        self.grid.set_color(row, col, color)
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .file_name
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "None".to_string());
        write!(
            f,
            "Picture, filename {} height {} width {}",
            name,
            self.height(),
            self.width()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let pic = Picture::default();
        assert_eq!(pic.dimensions(), (200, 100));
        assert!(pic.file_name().is_none());
    }

    #[test]
    fn test_display_with_file_name() {
        let pic = Picture::new(2, 3).with_file_name("beach.jpg");
        assert_eq!(pic.to_string(), "Picture, filename beach.jpg height 2 width 3");
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Picture::new(4, 4);
        let mut copy = original.clone();
        copy.set_color(1, 1, Color::BLACK).unwrap();
        assert_eq!(original.color(1, 1).unwrap(), Color::WHITE);
        assert_eq!(copy.color(1, 1).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_delegates_bounds() {
        let pic = Picture::new(2, 2);
        assert!(pic.color(2, 0).unwrap_err().is_bounds_error());
    }
}
