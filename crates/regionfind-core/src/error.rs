//! Error types for regionfind-core
//!
//! Provides a unified error type for the core data structures.
//! Each variant captures enough context for diagnostics without exposing
//! internal storage details.

use thiserror::Error;

/// regionfind-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw buffer length does not match the image size
    #[error("buffer length {actual} does not match {expected} pixels")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Pix};

    #[test]
    fn test_every_variant_has_a_source() {
        let err = Pix::new(0, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { width: 0, height: 4 }));
        assert_eq!(err.to_string(), "invalid image dimensions: 0x4");

        let err = Pix::from_raw(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, Error::BufferSize { expected: 4, actual: 3 }));

        let mut pm = Pix::new(3, 2).unwrap().to_mut();
        let err = pm.set_color(3, 0, Color::RED).unwrap_err();
        assert_eq!(err.to_string(), "pixel (3, 0) out of bounds for 3x2 image");
    }
}
