//! regionfind - Color region finding for Rust
//!
//! Finds the regions of an image whose pixels are close to a target color,
//! picks the largest one, and paints each region a distinct color for
//! inspection.
//!
//! # Overview
//!
//! - Image container and color access (`Pix`, `Color`, `Region`)
//! - Image I/O (PNG, JPEG, BMP, PNM) in [`io`]
//! - Region growing, finding, selection and recoloring in [`region`]
//!
//! # Example
//!
//! ```
//! use regionfind::region::{RegionFinder, RegionFinderOptions};
//! use regionfind::{Color, Pix};
//!
//! let pix = Pix::new_filled(10, 10, Color::RED).unwrap();
//! let mut finder = RegionFinder::with_options(RegionFinderOptions::default().with_min_region(5));
//! finder.set_image(pix);
//!
//! let regions = finder.find_regions(Color::RED).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].len(), 100);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use regionfind_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use regionfind_io as io;
pub use regionfind_region as region;
