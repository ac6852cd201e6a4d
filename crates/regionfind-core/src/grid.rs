//! Pixel grid traits
//!
//! The region algorithms only need random access to colors on a
//! width × height grid. [`PixelGrid`] is that read-only view and
//! [`PixelGridMut`] adds writes for output grids. [`Pix`] and [`PixMut`]
//! implement both where it makes sense.

use crate::color::Color;
use crate::pix::{Pix, PixMut};

/// Read-only random access to a grid of colors.
pub trait PixelGrid {
    /// Grid width in pixels.
    fn width(&self) -> u32;

    /// Grid height in pixels.
    fn height(&self) -> u32;

    /// Color at (x, y).
    ///
    /// Callers must bounds-check first; implementations may panic on
    /// out-of-range coordinates.
    fn color_at(&self, x: u32, y: u32) -> Color;

    /// Check whether `(x, y)` lies inside the grid.
    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Bounds-checked color lookup.
    fn try_color_at(&self, x: u32, y: u32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.color_at(x, y))
        } else {
            None
        }
    }
}

/// Write access to a grid of colors.
pub trait PixelGridMut: PixelGrid {
    /// Set the color at (x, y).
    ///
    /// Callers must bounds-check first; implementations may panic on
    /// out-of-range coordinates.
    fn set_color_at(&mut self, x: u32, y: u32, color: Color);
}

impl PixelGrid for Pix {
    #[inline]
    fn width(&self) -> u32 {
        Pix::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        Pix::height(self)
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from_pixel(self.get_pixel_unchecked(x, y))
    }
}

impl PixelGrid for PixMut {
    #[inline]
    fn width(&self) -> u32 {
        PixMut::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        PixMut::height(self)
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from_pixel(self.get_pixel_unchecked(x, y))
    }
}

impl PixelGridMut for PixMut {
    #[inline]
    fn set_color_at(&mut self, x: u32, y: u32, color: Color) {
        self.set_pixel_unchecked(x, y, color.to_pixel());
    }
}
