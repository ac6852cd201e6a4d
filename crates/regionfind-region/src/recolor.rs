//! Region visualization
//!
//! Paints each region a single color so the regions can be told apart at a
//! glance. [`paint_regions`] writes into any [`PixelGridMut`];
//! [`recolor_regions`] does the same on a copy of a [`Pix`].

use crate::error::{RegionError, RegionResult};
use regionfind_core::{Color, Pix, PixelGridMut, Region};

/// Draw an opaque color uniformly from the 24-bit RGB space.
pub fn random_color() -> Color {
    Color::from_rgb24(rand::random::<u32>())
}

/// Paint every region of `grid` with a color from `next_color`.
///
/// `next_color` is called once per region, in collection order. Pixels
/// outside all regions are left alone. Every point is checked against the
/// grid before anything is written, so a failed call leaves `grid`
/// unchanged.
///
/// # Errors
///
/// Returns [`RegionError::OutOfBounds`] for the first region point that
/// lies outside `grid`.
pub fn paint_regions<G, F>(
    grid: &mut G,
    regions: &[Region],
    mut next_color: F,
) -> RegionResult<()>
where
    G: PixelGridMut + ?Sized,
    F: FnMut() -> Color,
{
    if let Some(p) = regions
        .iter()
        .flat_map(|r| r.iter())
        .find(|p| !grid.in_bounds(p.x, p.y))
    {
        return Err(RegionError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: grid.width(),
            height: grid.height(),
        });
    }

    for region in regions {
        let color = next_color();
        for p in region {
            grid.set_color_at(p.x, p.y, color);
        }
    }
    Ok(())
}

/// Copy `pix` and paint every region with a color from `next_color`.
///
/// Same painting rules as [`paint_regions`]; `pix` itself is never
/// modified.
pub fn recolor_regions<F>(pix: &Pix, regions: &[Region], next_color: F) -> RegionResult<Pix>
where
    F: FnMut() -> Color,
{
    let mut out = pix.to_mut();
    paint_regions(&mut out, regions, next_color)?;
    Ok(out.into())
}
