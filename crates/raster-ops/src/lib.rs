//! # raster-ops
//!
//! Pixel-grid operations: color transforms, mirrors, region copy and edge
//! detection.
//!
//! Every operation is a plain function generic over [`PixelGrid`], so it
//! runs on a bare [`RasterGrid`] or on a [`Picture`] alike. Operations
//! mutate a grid in place, or read a source grid and write a separate
//! destination grid.
//!
//! # Modules
//!
//! - [`color`] - Per-pixel color transforms and [`ColorOp`]
//! - [`mirror`] - Vertical, horizontal and diagonal mirrors
//! - [`fixture`] - Windowed mirrors tuned to specific sample photos
//! - [`composite`] - Whole and partial grid copy
//! - [`collage`] - Fixed-layout collages built from copies
//! - [`edge`] - Gradient edge detection
//! - `parallel` - Rayon row-parallel variants (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelGrid, RasterGrid};
//! use raster_ops::{color, composite, mirror};
//!
//! let mut canvas = RasterGrid::filled(8, 8, Color::WHITE);
//! let mut tile = RasterGrid::filled(4, 4, Color::new(30, 60, 90));
//! color::negate(&mut tile).unwrap();
//!
//! composite::copy(&mut canvas, &tile, 0, 0).unwrap();
//! mirror::mirror_vertical(&mut canvas).unwrap();
//! assert_eq!(canvas.color(0, 7).unwrap(), Color::new(225, 195, 165));
//! ```
//!
//! Source and destination grids are separate borrows. To copy a grid onto
//! itself, pass a clone as the source.
//!
//! [`PixelGrid`]: raster_core::PixelGrid
//! [`RasterGrid`]: raster_core::RasterGrid
//! [`Picture`]: raster_core::Picture

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod collage;
pub mod color;
pub mod composite;
pub mod edge;
pub mod fixture;
pub mod mirror;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use color::ColorOp;
pub use error::{OpsError, OpsResult};
