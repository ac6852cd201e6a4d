//! PIX - The RGBA image container
//!
//! `Pix` is the concrete pixel grid used throughout regionfind.
//! Every pixel is one 32-bit word in `0xRRGGBBAA` order.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership). A finder holding
//! a `Pix` shares the pixel data with the caller instead of copying it.
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;

use crate::color::Color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// BMP format
    Bmp,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// PNM format
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Input file format
    informat: ImageFormat,
    /// One `0xRRGGBBAA` word per pixel, row-major
    data: Vec<u32>,
}

/// PIX - RGBA image container
///
/// # Examples
///
/// ```
/// use regionfind_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// All pixels are initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        Ok(Self::from_data(width, height, vec![0u32; size]))
    }

    /// Create a new PIX with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        Ok(Self::from_data(width, height, vec![color.to_pixel(); size]))
    }

    /// Create a PIX from raw row-major `0xRRGGBBAA` words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data` does not hold exactly
    /// `width * height` words.
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        if data.len() != size {
            return Err(Error::BufferSize {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Self::from_data(width, height, data))
    }

    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    fn from_data(width: u32, height: u32, data: Vec<u32>) -> Self {
        Pix {
            inner: Arc::new(PixData {
                width,
                height,
                informat: ImageFormat::Unknown,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of handles sharing this image's data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get one row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Create a zeroed image with the same size as this one.
    pub fn create_template(&self) -> Self {
        let size = self.inner.data.len();
        Self::from_data(self.inner.width, self.inner.height, vec![0u32; size])
    }

    /// Check whether two images have the same dimensions.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always copies, so the source is never affected by later writes.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.inner.as_ref().clone(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Set the input file format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw pixel data.
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw pixel data.
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get one mutable row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.inner.data.fill(color.to_pixel());
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
