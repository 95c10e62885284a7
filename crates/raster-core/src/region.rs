//! Rectangular regions in (row, col) space.
//!
//! # Coordinate System
//!
//! ```text
//! (0,0) ────────► col
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!  row
//! ```
//!
//! Bounds are half-open: a region covers rows `row_start..row_end` and
//! columns `col_start..col_end`.

/// A half-open rectangle of grid cells.
///
/// # Example
///
/// ```rust
/// use raster_core::Region;
///
/// let r = Region::new(0, 320, 240, 640);
/// assert_eq!(r.height(), 240);
/// assert_eq!(r.width(), 320);
/// assert!(r.contains(10, 400));
/// assert!(!r.contains(240, 400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// First row (inclusive)
    pub row_start: usize,
    /// First column (inclusive)
    pub col_start: usize,
    /// Last row (exclusive)
    pub row_end: usize,
    /// Last column (exclusive)
    pub col_end: usize,
}

impl Region {
    /// Creates a region from its start (inclusive) and end (exclusive) corners.
    #[inline]
    pub const fn new(row_start: usize, col_start: usize, row_end: usize, col_end: usize) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// Region covering a whole `width` x `height` grid.
    #[inline]
    pub const fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, height, width)
    }

    /// Number of rows covered (0 if the region is inverted).
    #[inline]
    pub fn height(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Number of columns covered (0 if the region is inverted).
    #[inline]
    pub fn width(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    /// Returns `true` if the region covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns `true` if `[row][col]` lies inside the region.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row_start && row < self.row_end && col >= self.col_start && col < self.col_end
    }

    /// Returns `true` if the region lies entirely inside a `width` x `height` grid.
    #[inline]
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.row_end <= height && self.col_end <= width
    }

    /// Intersection with another region, or `None` if they don't overlap.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let r = Region::new(
            self.row_start.max(other.row_start),
            self.col_start.max(other.col_start),
            self.row_end.min(other.row_end),
            self.col_end.min(other.col_end),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// Iterates `(row, col)` pairs in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.row_start..self.row_end)
            .flat_map(move |row| (self.col_start..self.col_end).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let r = Region::new(240, 0, 480, 320);
        assert_eq!(r.height(), 240);
        assert_eq!(r.width(), 320);
        assert!(!r.is_empty());
        assert!(Region::new(5, 5, 5, 9).is_empty());
        assert!(Region::new(9, 0, 5, 9).is_empty());
    }

    #[test]
    fn test_fits() {
        let r = Region::new(0, 0, 240, 640);
        assert!(r.fits(640, 480));
        assert!(!r.fits(320, 480));
    }

    #[test]
    fn test_intersect() {
        let a = Region::from_size(10, 10);
        let b = Region::new(8, 8, 11, 11);
        assert_eq!(a.intersect(&b), Some(Region::new(8, 8, 10, 10)));
        assert_eq!(a.intersect(&Region::new(10, 0, 12, 5)), None);
    }

    #[test]
    fn test_iter_coords() {
        let coords: Vec<_> = Region::new(1, 2, 3, 4).iter_coords().collect();
        assert_eq!(coords, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);
    }
}
