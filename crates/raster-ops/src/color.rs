//! Per-pixel color transforms.
//!
//! Each transform replaces a pixel's color with a function of that pixel's
//! own channels, nothing else. They come in three forms:
//!
//! - pure `Color -> Color` functions ([`negate_pixel`], ...)
//! - in-place grid passes ([`negate`], ...)
//! - the [`ColorOp`] enum, for choosing a transform at runtime
//!
//! # Formulas
//!
//! | Op | Result |
//! |----|--------|
//! | zero-blue | `b = 0` |
//! | keep-only-blue | `r = 0, g = 0` |
//! | negate | `c = 255 - c` for each channel |
//! | grayscale | `r = g = b = (r + g + b) / 3` |
//! | fix-underwater | `aqua = (b + g) / 2; r = 4r; g = 4(g - aqua) + aqua; b = 4(b - aqua) + aqua` |
//!
//! All divisions truncate. Intermediate values are `i32` and are clamped
//! into [0, 255] when stored.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelGrid, RasterGrid};
//! use raster_ops::color::{grayscale, ColorOp};
//!
//! let mut grid = RasterGrid::filled(4, 4, Color::new(10, 20, 40));
//! grayscale(&mut grid).unwrap();
//! assert_eq!(grid.color(0, 0).unwrap(), Color::new(23, 23, 23));
//!
//! let op: ColorOp = "negate".parse().unwrap();
//! assert_eq!(op.apply(Color::new(23, 23, 23)), Color::new(232, 232, 232));
//! ```

use crate::{OpsError, OpsResult};
use raster_core::{Color, PixelGrid};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Contrast multiplier used by [`fix_underwater`].
pub const UNDERWATER_CONTRAST: i32 = 4;

// ============================================================================
// Pure pixel functions
// ============================================================================

/// Sets blue to 0.
#[inline]
pub fn zero_blue_pixel(c: Color) -> Color {
    Color::new(c.red, c.green, 0)
}

/// Sets red and green to 0.
#[inline]
pub fn keep_only_blue_pixel(c: Color) -> Color {
    Color::new(0, 0, c.blue)
}

/// Replaces each channel with `255 - channel`.
#[inline]
pub fn negate_pixel(c: Color) -> Color {
    Color::new(255 - c.red, 255 - c.green, 255 - c.blue)
}

/// Sets each channel to the truncated mean of the three.
#[inline]
pub fn grayscale_pixel(c: Color) -> Color {
    let [r, g, b] = c.to_i32();
    let avg = (r + g + b) / 3;
    Color::clamped(avg, avg, avg)
}

/// Stretches red and pushes green/blue away from their mean.
#[inline]
pub fn fix_underwater_pixel(c: Color) -> Color {
    let [r, g, b] = c.to_i32();
    let aqua = (b + g) / 2;
    Color::clamped(
        UNDERWATER_CONTRAST * r,
        UNDERWATER_CONTRAST * (g - aqua) + aqua,
        UNDERWATER_CONTRAST * (b - aqua) + aqua,
    )
}

// ============================================================================
// ColorOp
// ============================================================================

/// A per-pixel transform chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorOp {
    /// Blue channel to 0.
    ZeroBlue,
    /// Red and green channels to 0.
    KeepOnlyBlue,
    /// Invert every channel.
    Negate,
    /// Channel average.
    Grayscale,
    /// Underwater contrast enhancement.
    FixUnderwater,
}

impl ColorOp {
    /// All ops, in declaration order.
    pub const ALL: [ColorOp; 5] = [
        ColorOp::ZeroBlue,
        ColorOp::KeepOnlyBlue,
        ColorOp::Negate,
        ColorOp::Grayscale,
        ColorOp::FixUnderwater,
    ];

    /// Applies this op to a single color.
    #[inline]
    pub fn apply(self, c: Color) -> Color {
        match self {
            Self::ZeroBlue => zero_blue_pixel(c),
            Self::KeepOnlyBlue => keep_only_blue_pixel(c),
            Self::Negate => negate_pixel(c),
            Self::Grayscale => grayscale_pixel(c),
            Self::FixUnderwater => fix_underwater_pixel(c),
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::ZeroBlue => "zero-blue",
            Self::KeepOnlyBlue => "keep-only-blue",
            Self::Negate => "negate",
            Self::Grayscale => "grayscale",
            Self::FixUnderwater => "fix-underwater",
        }
    }
}

impl fmt::Display for ColorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorOp {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|op| op.name() == key)
            .ok_or_else(|| OpsError::InvalidParameter(format!("unknown color op '{}'", s)))
    }
}

// ============================================================================
// Grid passes
// ============================================================================

/// Replaces every pixel with `f(pixel)`, row by row.
pub fn map_pixels<G, F>(grid: &mut G, f: F) -> OpsResult<()>
where
    G: PixelGrid + ?Sized,
    F: Fn(Color) -> Color,
{
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let c = grid.color(row, col)?;
            grid.set_color(row, col, f(c))?;
        }
    }
    Ok(())
}

/// Applies a [`ColorOp`] to every pixel.
pub fn apply_color_op<G: PixelGrid + ?Sized>(grid: &mut G, op: ColorOp) -> OpsResult<()> {
    trace!(width = grid.width(), height = grid.height(), op = op.name(), "color::apply");
    map_pixels(grid, |c| op.apply(c))
}

/// Sets the blue channel of every pixel to 0.
pub fn zero_blue<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    apply_color_op(grid, ColorOp::ZeroBlue)
}

/// Sets the red and green channels of every pixel to 0.
pub fn keep_only_blue<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    apply_color_op(grid, ColorOp::KeepOnlyBlue)
}

/// Negates every pixel. Applying it twice restores the grid.
pub fn negate<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    apply_color_op(grid, ColorOp::Negate)
}

/// Replaces every pixel with the truncated average of its channels.
pub fn grayscale<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    apply_color_op(grid, ColorOp::Grayscale)
}

/// Contrast enhancement for underwater photos (makes fish stand out).
pub fn fix_underwater<G: PixelGrid + ?Sized>(grid: &mut G) -> OpsResult<()> {
    apply_color_op(grid, ColorOp::FixUnderwater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::RasterGrid;

    fn arbitrary_grid(width: usize, height: usize) -> RasterGrid {
        RasterGrid::from_fn(width, height, |row, col| {
            Color::new(
                (row * 37 + col * 11) as u8,
                (row * 5 + col * 71 + 3) as u8,
                (row * 97 + col * 13 + 200) as u8,
            )
        })
    }

    #[test]
    fn test_zero_blue() {
        let mut grid = arbitrary_grid(3, 3);
        let before = grid.clone();
        zero_blue(&mut grid).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                let (a, b) = (before.color(row, col).unwrap(), grid.color(row, col).unwrap());
                assert_eq!(b, Color::new(a.red, a.green, 0));
            }
        }
    }

    #[test]
    fn test_keep_only_blue() {
        assert_eq!(keep_only_blue_pixel(Color::new(9, 8, 7)), Color::new(0, 0, 7));
    }

    #[test]
    fn test_negate_twice_restores() {
        let mut grid = arbitrary_grid(8, 8);
        let original = grid.clone();
        negate(&mut grid).unwrap();
        assert_ne!(grid, original);
        negate(&mut grid).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_grayscale_invariant() {
        let mut grid = arbitrary_grid(6, 5);
        let original = grid.clone();
        grayscale(&mut grid).unwrap();
        for row in 0..5 {
            for col in 0..6 {
                let [r0, g0, b0] = original.color(row, col).unwrap().to_i32();
                let c = grid.color(row, col).unwrap();
                assert_eq!(c.red, c.green);
                assert_eq!(c.green, c.blue);
                assert_eq!(c.red as i32, (r0 + g0 + b0) / 3);
            }
        }
    }

    #[test]
    fn test_grayscale_truncates() {
        // 255 + 255 + 254 = 764, 764 / 3 = 254.67
        assert_eq!(grayscale_pixel(Color::new(255, 255, 254)), Color::new(254, 254, 254));
    }

    #[test]
    fn test_fix_underwater_formula() {
        // aqua = (60 + 40) / 2 = 50
        // red = 4 * 30 = 120, green = 4 * (40 - 50) + 50 = 10, blue = 4 * (60 - 50) + 50 = 90
        assert_eq!(fix_underwater_pixel(Color::new(30, 40, 60)), Color::new(120, 10, 90));
    }

    #[test]
    fn test_fix_underwater_clamps() {
        // red 4 * 100 = 400 -> 255; aqua = (250 + 0) / 2 = 125
        // green = 4 * (0 - 125) + 125 = -375 -> 0; blue = 4 * 125 + 125 = 625 -> 255
        assert_eq!(fix_underwater_pixel(Color::new(100, 0, 250)), Color::new(255, 0, 255));
    }

    #[test]
    fn test_color_op_parse() {
        assert_eq!("zero-blue".parse::<ColorOp>().unwrap(), ColorOp::ZeroBlue);
        assert_eq!("Fix_Underwater".parse::<ColorOp>().unwrap(), ColorOp::FixUnderwater);
        assert!("sepia".parse::<ColorOp>().is_err());
        for op in ColorOp::ALL {
            assert_eq!(op.name().parse::<ColorOp>().unwrap(), op);
        }
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = RasterGrid::new(0, 0);
        negate(&mut grid).unwrap();
        assert!(grid.is_empty());
    }
}
