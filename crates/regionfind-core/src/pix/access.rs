//! Pixel access functions
//!
//! Checked accessors return `Option`/`Result`; the `_unchecked` variants
//! index directly and panic on out-of-range coordinates.

use super::{Pix, PixMut};
use crate::color::Color;
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`, or if `x >= width` on the last row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Get the color at (x, y).
    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel)
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_color(x, y).map(Color::rgb)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Get the color at (x, y).
    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`, or if `x >= width` on the last row.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    /// Set the color at (x, y).
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_color(x, y, Color::new(r, g, b))
    }
}
