//! Error types for grid operations.

use thiserror::Error;

/// Error type for grid operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A pixel access or region fell outside a grid.
    #[error(transparent)]
    Core(#[from] raster_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl OpsError {
    /// Returns `true` if the underlying cause is an out-of-range index or region.
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_bounds_error())
    }
}

/// Result type for grid operations.
pub type OpsResult<T> = Result<T, OpsError>;
