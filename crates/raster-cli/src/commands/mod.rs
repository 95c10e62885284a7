//! CLI command implementations

pub mod collage;
pub mod copy;
pub mod demo;
pub mod edges;
pub mod filter;
pub mod info;
pub mod mirror;

use anyhow::{Context, Result};
use raster_core::{Picture, PixelGrid};
use raster_io::WriteOptions;
use std::path::Path;
use tracing::info;

/// Settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// `-v` count.
    pub verbose: u8,
    /// Encoder settings for saved images.
    pub write: WriteOptions,
}

/// Load a picture from path
pub fn load_picture(path: &Path) -> Result<Picture> {
    let picture = raster_io::load_picture(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    info!(path = %path.display(), width = picture.grid().width(), height = picture.grid().height(), "Loaded");
    Ok(picture)
}

/// Save a picture to path
pub fn save_picture(path: &Path, picture: &Picture, opts: &RunOptions) -> Result<()> {
    raster_io::save_picture_with_options(path, picture, &opts.write)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), "Saved");
    Ok(())
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
