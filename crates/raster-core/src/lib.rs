//! # raster-core
//!
//! Core types for raster image processing.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Color`] - RGB value type, channels in [0, 255]
//! - [`PixelGrid`] - The get/set capability every filter works against
//! - [`RasterGrid`] - Flat row-major RGB buffer implementing [`PixelGrid`]
//! - [`Picture`] - A grid plus the file name it came from
//! - [`Region`] - Half-open rectangles in (row, col) space
//!
//! ## Crate Structure
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (filters, mirrors, copy, edge detection)
//!    +-- raster-io (PNG/JPEG read and write)
//!    +-- raster-cli (command-line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - Parallel row iteration on [`RasterGrid`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod grid;
pub mod picture;
pub mod region;

pub use color::Color;
pub use error::{Error, Result};
pub use grid::{PixelGrid, RasterGrid, CHANNELS};
pub use picture::Picture;
pub use region::Region;

/// Prelude module for convenient imports.
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::grid::{PixelGrid, RasterGrid};
    pub use crate::picture::Picture;
    pub use crate::region::Region;
}
