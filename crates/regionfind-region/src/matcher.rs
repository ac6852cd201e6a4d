//! Color similarity predicate
//!
//! Two colors match when the sum of their absolute per-channel
//! differences (red, green, blue) is at most a threshold. Alpha is ignored.

use regionfind_core::Color;

/// Default maximum summed channel difference for two colors to match
pub const DEFAULT_MAX_COLOR_DIFF: u32 = 50;

/// Decides whether two colors are similar enough to share a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatcher {
    max_diff: u32,
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COLOR_DIFF)
    }
}

impl ColorMatcher {
    /// Create a matcher with the given threshold.
    ///
    /// The largest possible distance is `3 * 255 = 765`, so any threshold
    /// at or above that matches every pair.
    pub const fn new(max_diff: u32) -> Self {
        Self { max_diff }
    }

    /// The threshold this matcher compares against.
    #[inline]
    pub fn max_diff(&self) -> u32 {
        self.max_diff
    }

    /// Sum of absolute differences of the red, green, and blue channels.
    #[inline]
    pub fn distance(a: Color, b: Color) -> u32 {
        a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32
    }

    /// Check whether `a` and `b` are within the threshold.
    #[inline]
    pub fn matches(&self, a: Color, b: Color) -> bool {
        Self::distance(a, b) <= self.max_diff
    }
}
