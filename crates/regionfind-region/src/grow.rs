//! Region growing from a single seed
//!
//! Grows one region with an explicit stack. A neighbor is marked visited
//! the moment it is pushed, so no coordinate enters the stack twice.
//!
//! # Neighbor window
//!
//! The neighbors of `p` are every pixel in `[p.y - R, p.y + R) × [p.x - R, p.x + R)`
//! clipped to the grid, where `R` is the search radius. The lower bound is
//! inclusive and the upper bound exclusive, so the window reaches `R` pixels
//! up and left but only `R - 1` pixels down and right. With the default
//! `R = 2` the window still covers all eight immediate neighbors, so any
//! 8-connected patch is reached, and the fill also jumps one-pixel gaps
//! above and to the left. This is tolerant connectivity, not strict
//! 4- or 8-connectivity.

use crate::error::{RegionError, RegionResult};
use crate::matcher::ColorMatcher;
use crate::visited::VisitedTracker;
use regionfind_core::{Color, PixelGrid, Point, Region};
use std::ops::Range;

/// Default neighbor search radius
pub const DEFAULT_SEARCH_RADIUS: u32 = 2;

/// Half-open neighbor range `[c - r, c + r)` clipped to `[0, limit)`.
#[inline]
fn neighbor_range(c: u32, r: u32, limit: u32) -> Range<u32> {
    c.saturating_sub(r)..c.saturating_add(r).min(limit)
}

/// Flood fill with a color predicate and a square search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGrower {
    matcher: ColorMatcher,
    radius: u32,
}

impl Default for RegionGrower {
    fn default() -> Self {
        Self::new(ColorMatcher::default(), DEFAULT_SEARCH_RADIUS)
    }
}

impl RegionGrower {
    /// Create a grower from a matcher and a search radius.
    pub const fn new(matcher: ColorMatcher, radius: u32) -> Self {
        Self { matcher, radius }
    }

    /// The color predicate used for neighbors.
    pub fn matcher(&self) -> &ColorMatcher {
        &self.matcher
    }

    /// The neighbor search radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Grow one region starting at `seed`.
    ///
    /// The seed is taken as given and is not checked against `target`;
    /// every other point in the result matches `target`. Points are listed
    /// in the order they were popped. All points of the region are marked in
    /// `visited`, so a later call never revisits them.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfBounds`] if `seed` lies outside the grid,
    /// and [`RegionError::InvalidParameters`] if `visited` was sized for a
    /// different grid.
    pub fn grow<G: PixelGrid + ?Sized>(
        &self,
        grid: &G,
        seed: Point,
        target: Color,
        visited: &mut VisitedTracker,
    ) -> RegionResult<Region> {
        let (width, height) = (grid.width(), grid.height());
        if visited.width() != width || visited.height() != height {
            return Err(RegionError::InvalidParameters(format!(
                "visited tracker is {}x{} but grid is {}x{}",
                visited.width(),
                visited.height(),
                width,
                height
            )));
        }
        if !grid.in_bounds(seed.x, seed.y) {
            return Err(RegionError::OutOfBounds {
                x: seed.x,
                y: seed.y,
                width,
                height,
            });
        }

        Ok(self.grow_from(grid, seed, target, visited))
    }

    /// Grow without validating the seed or tracker size.
    ///
    /// Callers guarantee `seed` is in bounds and `visited` matches the grid.
    pub(crate) fn grow_from<G: PixelGrid + ?Sized>(
        &self,
        grid: &G,
        seed: Point,
        target: Color,
        visited: &mut VisitedTracker,
    ) -> Region {
        let (width, height) = (grid.width(), grid.height());
        let mut region = Region::new();
        let mut stack = vec![seed];

        while let Some(p) = stack.pop() {
            region.push(p);
            visited.mark_point(p);

            for ny in neighbor_range(p.y, self.radius, height) {
                for nx in neighbor_range(p.x, self.radius, width) {
                    if !visited.is_visited(nx, ny)
                        && self.matcher.matches(target, grid.color_at(nx, ny))
                    {
                        visited.mark(nx, ny);
                        stack.push(Point::new(nx, ny));
                    }
                }
            }
        }

        region
    }
}
