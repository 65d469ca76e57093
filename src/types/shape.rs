//! 2D grid shape type.

use std::fmt;

/// Shape of a structured 2D grid (rows × columns).
///
/// Row `i` runs along the first array axis, column `j` along the second,
/// so a grid of shape `R×C` has `R * C` cells stored row-major.
///
/// Zero extents are allowed and describe an empty grid.
///
/// # Example
///
/// ```
/// use drymask_rs::types::GridShape;
///
/// let shape = GridShape::new(100, 50);
/// assert_eq!(shape.rows(), 100);
/// assert_eq!(shape.cols(), 50);
/// assert_eq!(shape.len(), 5000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl GridShape {
    /// Create a new grid shape.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Create a square shape (same extent in both directions).
    pub const fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, or `None` if it does not fit in `usize`.
    #[inline]
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Total number of cells, saturating at `usize::MAX`.
    ///
    /// Every [`Field2D`](crate::grid::Field2D) has a shape whose cell count
    /// fits, so this is exact for shapes taken from a field.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// True if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major flat index of cell `(i, j)`.
    #[inline(always)]
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols, "cell ({}, {}) outside {}", i, j, self);
        i * self.cols + j
    }

    /// Return as tuple (rows, cols).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for GridShape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_creation() {
        let s = GridShape::new(100, 50);
        assert_eq!(s.rows(), 100);
        assert_eq!(s.cols(), 50);
        assert_eq!(s.len(), 5000);
    }

    #[test]
    fn test_flat_index_is_row_major() {
        let s = GridShape::new(3, 4);
        assert_eq!(s.flat_index(0, 0), 0);
        assert_eq!(s.flat_index(0, 3), 3);
        assert_eq!(s.flat_index(1, 0), 4);
        assert_eq!(s.flat_index(2, 3), 11);
    }

    #[test]
    fn test_empty_shape() {
        assert!(GridShape::new(0, 7).is_empty());
        assert!(GridShape::new(7, 0).is_empty());
        assert!(!GridShape::square(1).is_empty());
    }

    #[test]
    fn test_len_overflow() {
        let s = GridShape::new(usize::MAX / 2 + 1, 2);
        assert_eq!(s.checked_len(), None);
        assert_eq!(s.len(), usize::MAX);
        assert!(!s.is_empty());
        assert_eq!(GridShape::new(3, 4).checked_len(), Some(12));
    }

    #[test]
    fn test_from_tuple() {
        let s: GridShape = (20, 10).into();
        assert_eq!(s.as_tuple(), (20, 10));
        assert_eq!(s.to_string(), "20×10");
    }
}
