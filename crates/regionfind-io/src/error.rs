//! Error types for regionfind-io

use regionfind_core::ImageFormat;
use thiserror::Error;

/// Errors that can occur while reading or writing images
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regionfind_core::Error),

    /// Decoder or encoder error from the `image` crate
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format cannot be written
    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(ImageFormat),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
