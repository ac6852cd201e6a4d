//! Per-pixel visited marks for one scan
//!
//! A tracker is created for each scan and dropped when it ends; it is never
//! stored alongside the regions it helped produce.

use regionfind_core::Point;

/// Grid-shaped boolean map of pixels already claimed by a traversal.
#[derive(Debug, Clone)]
pub struct VisitedTracker {
    width: u32,
    height: u32,
    marks: Vec<bool>,
}

impl VisitedTracker {
    /// Create a tracker with every pixel unvisited.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            marks: vec![false; width as usize * height as usize],
        }
    }

    /// Tracker width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tracker height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} visited tracker",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Check whether (x, y) has been visited.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the tracker.
    #[inline]
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.marks[self.index(x, y)]
    }

    /// Mark (x, y) as visited.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the tracker.
    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.marks[i] = true;
    }

    /// Mark a point as visited.
    #[inline]
    pub fn mark_point(&mut self, p: Point) {
        self.mark(p.x, p.y);
    }

    /// Number of visited pixels.
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// Reset every pixel to unvisited.
    pub fn clear(&mut self) {
        self.marks.fill(false);
    }
}
