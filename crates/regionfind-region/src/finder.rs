//! Region finding over a whole image
//!
//! [`find_regions`] scans a grid in row-major order and grows a region from
//! every pixel that matches the target and has not been claimed yet. Regions
//! with `min_region` points or fewer are dropped, but their pixels stay
//! claimed for the rest of the scan so they are never used as seeds again.
//!
//! [`RegionFinder`] wraps the scan with the state a caller works against:
//! the current image, the last region collection, and the last recolored
//! image.

use crate::error::{RegionError, RegionResult};
use crate::grow::{DEFAULT_SEARCH_RADIUS, RegionGrower};
use crate::matcher::{ColorMatcher, DEFAULT_MAX_COLOR_DIFF};
use crate::recolor::{random_color, recolor_regions};
use crate::select::largest_region;
use crate::visited::VisitedTracker;
use log::{debug, trace};
use regionfind_core::{Color, Pix, PixelGrid, Point, Region};

/// Default minimum region size; regions must have more points than this
pub const DEFAULT_MIN_REGION: usize = 50;

/// Options for region finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFinderOptions {
    /// Maximum summed RGB difference for a pixel to match the target
    pub max_color_diff: u32,
    /// Regions with this many points or fewer are discarded
    pub min_region: usize,
    /// Neighbor search radius used while growing
    pub search_radius: u32,
}

impl Default for RegionFinderOptions {
    fn default() -> Self {
        Self {
            max_color_diff: DEFAULT_MAX_COLOR_DIFF,
            min_region: DEFAULT_MIN_REGION,
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

impl RegionFinderOptions {
    /// Set the color match threshold
    pub fn with_max_color_diff(mut self, max_color_diff: u32) -> Self {
        self.max_color_diff = max_color_diff;
        self
    }

    /// Set the minimum region size
    pub fn with_min_region(mut self, min_region: usize) -> Self {
        self.min_region = min_region;
        self
    }

    /// Set the neighbor search radius
    pub fn with_search_radius(mut self, search_radius: u32) -> Self {
        self.search_radius = search_radius;
        self
    }

    /// Build the grower these options describe
    pub fn grower(&self) -> RegionGrower {
        RegionGrower::new(ColorMatcher::new(self.max_color_diff), self.search_radius)
    }
}

/// Find all regions matching `target` in `grid`.
///
/// Regions come back in the row-major order of their seeds. They are
/// pairwise disjoint and each has more than `options.min_region` points.
/// A target that matches nothing yields an empty vector.
///
/// # Examples
///
/// ```
/// use regionfind_core::{Color, Pix};
/// use regionfind_region::{RegionFinderOptions, find_regions};
///
/// let pix = Pix::new_filled(10, 10, Color::RED).unwrap();
/// let options = RegionFinderOptions::default().with_min_region(5);
/// let regions = find_regions(&pix, Color::RED, &options);
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].len(), 100);
/// ```
pub fn find_regions<G: PixelGrid + ?Sized>(
    grid: &G,
    target: Color,
    options: &RegionFinderOptions,
) -> Vec<Region> {
    let grower = options.grower();
    let (width, height) = (grid.width(), grid.height());
    let mut visited = VisitedTracker::new(width, height);
    let mut regions = Vec::new();
    let mut discarded = 0usize;

    for y in 0..height {
        for x in 0..width {
            if visited.is_visited(x, y) || !grower.matcher().matches(target, grid.color_at(x, y))
            {
                continue;
            }
            let region = grower.grow_from(grid, Point::new(x, y), target, &mut visited);
            if region.len() > options.min_region {
                regions.push(region);
            } else {
                trace!(
                    "discarding {}-point region seeded at ({}, {})",
                    region.len(),
                    x,
                    y
                );
                discarded += 1;
            }
        }
    }

    debug!(
        "found {} regions matching {:?} in {}x{} grid ({} below {} points discarded)",
        regions.len(),
        target.rgb(),
        width,
        height,
        discarded,
        options.min_region
    );
    regions
}

/// Finds and holds the color regions of one image.
///
/// All operations are synchronous. Methods that change the stored results
/// take `&mut self`, so one finder is never scanned and recolored at the
/// same time.
///
/// # Examples
///
/// ```
/// use regionfind_core::{Color, Pix};
/// use regionfind_region::{RegionFinder, RegionFinderOptions};
///
/// let pix = Pix::new_filled(10, 10, Color::RED).unwrap();
/// let mut finder = RegionFinder::with_options(RegionFinderOptions::default().with_min_region(5));
/// finder.set_image(pix);
///
/// finder.find_regions(Color::RED).unwrap();
/// assert_eq!(finder.largest_region().unwrap().map(|r| r.len()), Some(100));
///
/// let recolored = finder.recolor_image().unwrap();
/// assert_eq!(recolored.width(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionFinder {
    image: Option<Pix>,
    options: RegionFinderOptions,
    regions: Option<Vec<Region>>,
    recolored: Option<Pix>,
}

impl RegionFinder {
    /// Create a finder with no image and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder for `image` with default options.
    pub fn with_image(image: Pix) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Create a finder with no image and the given options.
    pub fn with_options(options: RegionFinderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the image.
    ///
    /// Regions and the recolored image from the previous image are
    /// discarded, so later calls never mix coordinates from two images.
    pub fn set_image(&mut self, image: Pix) {
        self.image = Some(image);
        self.regions = None;
        self.recolored = None;
    }

    /// The current image, if any.
    pub fn image(&self) -> Option<&Pix> {
        self.image.as_ref()
    }

    /// The options used by the next scan.
    pub fn options(&self) -> &RegionFinderOptions {
        &self.options
    }

    /// Replace the options used by later scans.
    ///
    /// Results already computed are kept.
    pub fn set_options(&mut self, options: RegionFinderOptions) {
        self.options = options;
    }

    /// Scan the image for regions matching `target`.
    ///
    /// Replaces any previous region collection and returns the new one.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NoImageLoaded`] if no image is set.
    pub fn find_regions(&mut self, target: Color) -> RegionResult<&[Region]> {
        let image = self.image.as_ref().ok_or(RegionError::NoImageLoaded)?;
        let regions = find_regions(image, target, &self.options);
        let regions = self.regions.insert(regions);
        Ok(regions.as_slice())
    }

    /// The regions from the last scan, or `None` before the first scan.
    pub fn regions(&self) -> Option<&[Region]> {
        self.regions.as_deref()
    }

    fn computed_regions(&self) -> RegionResult<(&Pix, &[Region])> {
        let image = self.image.as_ref().ok_or(RegionError::NoImageLoaded)?;
        let regions = self
            .regions
            .as_deref()
            .ok_or(RegionError::NoRegionsComputed)?;
        Ok((image, regions))
    }

    /// The largest region from the last scan.
    ///
    /// Returns `Ok(None)` when the last scan found nothing. Ties go to the
    /// region discovered first.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NoImageLoaded`] if no image is set and
    /// [`RegionError::NoRegionsComputed`] if no scan has run on it.
    pub fn largest_region(&self) -> RegionResult<Option<&Region>> {
        let (_, regions) = self.computed_regions()?;
        Ok(largest_region(regions))
    }

    /// Recolor the image, giving each region a random color.
    ///
    /// The result is stored and also available from
    /// [`recolored_image`](Self::recolored_image). The source image is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Same conditions as [`largest_region`](Self::largest_region).
    pub fn recolor_image(&mut self) -> RegionResult<&Pix> {
        self.recolor_image_with(random_color)
    }

    /// Recolor the image, taking one color per region from `next_color`.
    pub fn recolor_image_with<F>(&mut self, next_color: F) -> RegionResult<&Pix>
    where
        F: FnMut() -> Color,
    {
        let (image, regions) = self.computed_regions()?;
        let recolored = recolor_regions(image, regions, next_color)?;
        debug!("recolored {} regions", regions.len());
        Ok(&*self.recolored.insert(recolored))
    }

    /// The last recolored image, if any.
    pub fn recolored_image(&self) -> Option<&Pix> {
        self.recolored.as_ref()
    }
}
