//! regionfind-io - Image I/O for regionfind
//!
//! Decoding and encoding are delegated to the `image` crate. This crate only
//! converts between its buffers and [`Pix`], so the region algorithms never
//! see a file format.
//!
//! # Examples
//!
//! ```
//! use regionfind_core::{Color, Pix};
//! use regionfind_io::{pix_from_rgba, pix_to_rgba};
//!
//! let pix = Pix::new_filled(4, 3, Color::RED).unwrap();
//! let rgba = pix_to_rgba(&pix);
//! assert_eq!(rgba.dimensions(), (4, 3));
//!
//! let back = pix_from_rgba(&rgba).unwrap();
//! assert_eq!(back.get_color(2, 1), Some(Color::RED));
//! ```

mod error;

pub use error::{IoError, IoResult};
pub use regionfind_core::ImageFormat;

use image::{DynamicImage, ImageReader, Rgba, RgbaImage};
use regionfind_core::{Color, Pix};
use std::path::Path;

/// Map an `image` crate format onto [`ImageFormat`].
fn format_from_image(format: Option<image::ImageFormat>) -> ImageFormat {
    match format {
        Some(image::ImageFormat::Png) => ImageFormat::Png,
        Some(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
        Some(image::ImageFormat::Bmp) => ImageFormat::Bmp,
        Some(image::ImageFormat::Pnm) => ImageFormat::Pnm,
        _ => ImageFormat::Unknown,
    }
}

fn format_to_image(format: ImageFormat) -> IoResult<image::ImageFormat> {
    match format {
        ImageFormat::Png => Ok(image::ImageFormat::Png),
        ImageFormat::Jpeg => Ok(image::ImageFormat::Jpeg),
        ImageFormat::Bmp => Ok(image::ImageFormat::Bmp),
        ImageFormat::Pnm => Ok(image::ImageFormat::Pnm),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(format)),
    }
}

/// Convert an RGBA buffer into a [`Pix`].
///
/// # Errors
///
/// Returns [`IoError::Core`] if the buffer has a zero dimension.
pub fn pix_from_rgba(img: &RgbaImage) -> IoResult<Pix> {
    let (width, height) = img.dimensions();
    let data = img
        .pixels()
        .map(|p| Color::from(p.0).to_pixel())
        .collect();
    Ok(Pix::from_raw(width, height, data)?)
}

/// Convert a [`Pix`] into an RGBA buffer.
pub fn pix_to_rgba(pix: &Pix) -> RgbaImage {
    RgbaImage::from_fn(pix.width(), pix.height(), |x, y| {
        Rgba(Color::from_pixel(pix.get_pixel_unchecked(x, y)).into())
    })
}

/// Read an image file into a [`Pix`].
///
/// The format is guessed from the file contents, falling back to the
/// extension. The decoded image is converted to RGBA.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let reader = ImageReader::open(path.as_ref())?.with_guessed_format()?;
    let informat = format_from_image(reader.format());
    let img = reader.decode()?;
    let mut pm = pix_from_rgba(&img.to_rgba8())?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    pm.set_informat(informat);
    Ok(pm.into())
}

/// Write a [`Pix`] to a file in the given format.
///
/// Only PNG keeps the alpha channel; JPEG, BMP, and PNM are written as RGB.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let target = format_to_image(format)?;
    let rgba = pix_to_rgba(pix);
    match format {
        ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Pnm => {
            DynamicImage::ImageRgba8(rgba)
                .to_rgb8()
                .save_with_format(path.as_ref(), target)?
        }
        _ => rgba.save_with_format(path.as_ref(), target)?,
    }
    Ok(())
}
