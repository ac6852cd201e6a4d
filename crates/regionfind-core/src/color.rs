//! RGBA color value and 32-bit pixel packing helpers.
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract alpha component from a 32-bit pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Compose a 32-bit RGB pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_rgba(r, g, b, 255)
}

/// Compose a 32-bit RGBA pixel.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// An RGBA color.
///
/// Alpha is carried through copies but does not take part in color
/// comparisons made by the region crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Black color
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White color
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Red color
    pub const RED: Color = Color::new(255, 0, 0);
    /// Green color
    pub const GREEN: Color = Color::new(0, 255, 0);
    /// Blue color
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Create an opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a 24-bit `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_rgb24(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Pack into a 24-bit `0xRRGGBB` value, dropping alpha.
    pub const fn to_rgb24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack a 32-bit `0xRRGGBBAA` pixel.
    #[inline]
    pub fn from_pixel(pixel: u32) -> Self {
        Self::with_alpha(red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Pack into a 32-bit `0xRRGGBBAA` pixel.
    #[inline]
    pub fn to_pixel(self) -> u32 {
        compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// RGB channels as a tuple.
    #[inline]
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::with_alpha(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_packing() {
        let pixel = compose_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(pixel, 0x12345678);
        assert_eq!(red(pixel), 0x12);
        assert_eq!(green(pixel), 0x34);
        assert_eq!(blue(pixel), 0x56);
        assert_eq!(alpha(pixel), 0x78);
        assert_eq!(alpha(compose_rgb(1, 2, 3)), 255);
    }

    #[test]
    fn test_color_pixel_conversion() {
        let c = Color::with_alpha(200, 100, 50, 7);
        assert_eq!(Color::from_pixel(c.to_pixel()), c);
    }

    #[test]
    fn test_rgb24_is_opaque_and_drops_high_bits() {
        let c = Color::from_rgb24(0xFF_AB_CD_EF);
        assert_eq!(c.rgb(), (0xAB, 0xCD, 0xEF));
        assert_eq!(c.a, 255);
        assert_eq!(c.to_rgb24(), 0xABCDEF);
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
