//! Error types for regionfind-region

use thiserror::Error;

/// Errors that can occur during region operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regionfind_core::Error),

    /// A region operation ran before an image was set
    #[error("no image loaded")]
    NoImageLoaded,

    /// Regions were requested before any successful scan
    #[error("no regions computed: call find_regions first")]
    NoRegionsComputed,

    /// A coordinate outside the grid was handed in
    #[error("point ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
