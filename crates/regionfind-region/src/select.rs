//! Region selection by size

use regionfind_core::Region;

/// Return the region with the most points.
///
/// Ties go to the region that comes first in `regions`; for a finder's
/// collection that is row-major discovery order. Returns `None` if
/// `regions` is empty.
pub fn largest_region(regions: &[Region]) -> Option<&Region> {
    let mut iter = regions.iter();
    let mut largest = iter.next()?;
    for region in iter {
        if region.len() > largest.len() {
            largest = region;
        }
    }
    Some(largest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionfind_core::Point;

    fn line(y: u32, len: u32) -> Region {
        (0..len).map(|x| Point::new(x, y)).collect()
    }

    #[test]
    fn test_largest_region() {
        let regions = vec![line(0, 3), line(1, 7), line(2, 5)];
        assert_eq!(largest_region(&regions).map(Region::len), Some(7));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let regions = vec![line(0, 2), line(1, 6), line(2, 6)];
        let largest = largest_region(&regions).unwrap();
        assert_eq!(largest.get(0), Some(Point::new(0, 1)));
    }

    #[test]
    fn test_empty_collection() {
        assert!(largest_region(&[]).is_none());
    }
}
