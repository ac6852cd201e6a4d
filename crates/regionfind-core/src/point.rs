//! Point, Region - Integer pixel coordinates and ordered point lists
//!
//! A [`Region`] is the set of pixels found by one flood-fill expansion.
//! Points are kept in discovery order, which follows the traversal and
//! carries no spatial meaning.

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (u32, u32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Ordered list of points making up one region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Create a new empty region.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a region with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a region from an existing point list.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in discovery order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the region, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Iterate over points in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Check whether the region contains `point`.
    ///
    /// This is a linear search.
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Compute the inclusive bounding box.
    ///
    /// Returns `(x_min, y_min, x_max, y_max)`, or `None` if empty.
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        let first = self.points.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(
            self.points
                .iter()
                .fold(init, |(x0, y0, x1, y1), p| {
                    (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))
                }),
        )
    }

    /// Compute the centroid.
    ///
    /// Returns `(cx, cy)`, or `None` if empty.
    pub fn centroid(&self) -> Option<(f32, f32)> {
        if self.points.is_empty() {
            return None;
        }
        let (sx, sy) = self
            .points
            .iter()
            .fold((0u64, 0u64), |(sx, sy), p| (sx + p.x as u64, sy + p.y as u64));
        let n = self.points.len() as f64;
        Some(((sx as f64 / n) as f32, (sy as f64 / n) as f32))
    }
}

impl FromIterator<Point> for Region {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Region {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_basic() {
        let mut region = Region::new();
        assert!(region.is_empty());
        region.push(Point::new(3, 4));
        region.push(Point::new(5, 1));
        assert_eq!(region.len(), 2);
        assert_eq!(region.get(0), Some(Point::new(3, 4)));
        assert_eq!(region.get(2), None);
        assert!(region.contains(Point::new(5, 1)));
        assert!(!region.contains(Point::new(1, 5)));
    }

    #[test]
    fn test_region_bounding_box() {
        let region: Region = [(4, 2), (1, 7), (6, 3)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(region.bounding_box(), Some((1, 2, 6, 7)));
        assert_eq!(Region::new().bounding_box(), None);
    }

    #[test]
    fn test_region_centroid() {
        let region = Region::from_points(vec![
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(0, 2),
            Point::new(2, 2),
        ]);
        let (cx, cy) = region.centroid().unwrap();
        assert!((cx - 1.0).abs() < 1e-6);
        assert!((cy - 1.0).abs() < 1e-6);
        assert!(Region::new().centroid().is_none());
    }
}
