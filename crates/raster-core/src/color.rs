//! RGB color values.
//!
//! [`Color`] is a plain value: reading a pixel returns a copy, and the only
//! way to change a pixel is to store a new [`Color`] back into the grid.
//!
//! # Channel Range
//!
//! Channels are stored as `u8`, so a `Color` is always within [0, 255].
//! Arithmetic in the filters runs in `i32` and is brought back into range by
//! [`Color::clamped`], the same clamp the storage layer applies in
//! [`PixelGrid::set_red`](crate::PixelGrid::set_red) and friends.
//!
//! # Example
//!
//! ```rust
//! use raster_core::Color;
//!
//! let c = Color::clamped(300, -20, 128);
//! assert_eq!(c, Color::new(255, 0, 128));
//!
//! let d = Color::BLACK.distance(&Color::WHITE);
//! assert!((d - 441.67).abs() < 0.01);
//! ```

use std::fmt;

/// Largest channel value.
pub const CHANNEL_MAX: i32 = 255;

/// An (red, green, blue) triple, each channel in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Color {
    /// Pure black (0, 0, 0).
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Pure white (255, 255, 255).
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from in-range channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from arbitrary integers, clamping each into [0, 255].
    #[inline]
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Returns the channels as `i32` for arithmetic.
    #[inline]
    pub fn to_i32(self) -> [i32; 3] {
        [self.red as i32, self.green as i32, self.blue as i32]
    }

    /// Returns the channels as an `[r, g, b]` byte array.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Euclidean distance between two colors treated as 3D vectors.
    ///
    /// `sqrt(dr^2 + dg^2 + db^2)`; ranges from 0 to about 441.67.
    #[inline]
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = self.red as f64 - other.red as f64;
        let dg = self.green as f64 - other.green as f64;
        let db = self.blue as f64 - other.blue as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [u8; 3] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(red={}, green={}, blue={})", self.red, self.green, self.blue)
    }
}

/// Clamps an integer channel value into [0, 255].
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, CHANNEL_MAX) as u8
}
