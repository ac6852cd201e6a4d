//! regionfind-region - Color region finding
//!
//! This crate finds the regions of an RGBA image whose pixels are close to
//! a target color:
//!
//! - **Color matching** - Summed per-channel RGB distance against a threshold
//! - **Region growing** - Stack-based flood fill over a square search window
//! - **Region finding** - Row-major scan that keeps regions above a minimum size
//! - **Selection and recoloring** - Largest region lookup and per-region painting
//!
//! # Examples
//!
//! ## Finding regions
//!
//! ```
//! use regionfind_region::{RegionFinder, RegionFinderOptions};
//! use regionfind_core::{Color, Pix};
//!
//! // Green background with a 10x10 red square
//! let mut pm = Pix::new_filled(20, 20, Color::GREEN).unwrap().to_mut();
//! for y in 5..15 {
//!     for x in 5..15 {
//!         pm.set_color(x, y, Color::RED).unwrap();
//!     }
//! }
//!
//! let mut finder = RegionFinder::with_image(pm.into());
//! let regions = finder.find_regions(Color::RED).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].len(), 100);
//! ```
//!
//! ## Growing a single region
//!
//! ```
//! use regionfind_region::{RegionGrower, VisitedTracker};
//! use regionfind_core::{Color, Pix, Point};
//!
//! let pix = Pix::new_filled(4, 4, Color::BLUE).unwrap();
//! let mut visited = VisitedTracker::new(4, 4);
//! let region = RegionGrower::default()
//!     .grow(&pix, Point::new(0, 0), Color::BLUE, &mut visited)
//!     .unwrap();
//! assert_eq!(region.len(), 16);
//! ```

pub mod error;
pub mod finder;
pub mod grow;
pub mod matcher;
pub mod recolor;
pub mod select;
pub mod visited;

// Re-export core types
pub use regionfind_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use finder::{DEFAULT_MIN_REGION, RegionFinder, RegionFinderOptions, find_regions};
pub use grow::{DEFAULT_SEARCH_RADIUS, RegionGrower};
pub use matcher::{ColorMatcher, DEFAULT_MAX_COLOR_DIFF};
pub use recolor::{paint_regions, random_color, recolor_regions};
pub use select::largest_region;
pub use visited::VisitedTracker;
