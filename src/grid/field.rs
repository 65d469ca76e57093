//! Scalar field storage on a structured 2D grid.

use crate::types::GridShape;

use super::GridError;

/// A scalar `f64` field over a structured 2D grid.
///
/// Stores values in row-major layout: `data[i * cols + j]` for row i, column j.
#[derive(Clone, Debug)]
pub struct Field2D {
    data: Vec<f64>,
    shape: GridShape,
}

impl Field2D {
    /// Create a field with every cell set to `value`.
    pub fn filled(shape: GridShape, value: f64) -> Result<Self, GridError> {
        let len = checked_len(shape)?;
        Ok(Self {
            data: vec![value; len],
            shape,
        })
    }

    /// Create a field initialized to zero.
    pub fn zeros(shape: GridShape) -> Result<Self, GridError> {
        Self::filled(shape, 0.0)
    }

    /// Create a field from raw row-major data.
    pub fn from_data(data: Vec<f64>, shape: GridShape) -> Result<Self, GridError> {
        let len = checked_len(shape)?;
        if data.len() != len {
            return Err(GridError::DataLength {
                expected: len,
                found: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Create a field from a list of rows.
    ///
    /// All rows must have the same length. An empty list gives a 0×0 field.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let shape = GridShape::new(rows.len(), cols);
        let mut data = Vec::with_capacity(checked_len(shape)?);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self { data, shape })
    }

    /// Apply `f` to every cell, producing a field of the same shape.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            shape: self.shape,
        }
    }

    /// Grid shape.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Raw row-major values.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw row-major values.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Value at row i, column j.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.shape.flat_index(i, j)]
    }

    /// Set the value at row i, column j.
    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.shape.flat_index(i, j);
        self.data[idx] = value;
    }

    /// Values of row i.
    pub fn row(&self, i: usize) -> &[f64] {
        let cols = self.shape.cols();
        &self.data[i * cols..(i + 1) * cols]
    }

    /// Iterate over `(i, j, value)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.shape.cols();
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (idx / cols, idx % cols, v))
    }

    /// Number of NaN cells.
    pub fn count_nan(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }
}

/// Cell count of `shape`, rejecting shapes that overflow `usize`.
fn checked_len(shape: GridShape) -> Result<usize, GridError> {
    shape.checked_len().ok_or(GridError::ShapeOverflow {
        rows: shape.rows(),
        cols: shape.cols(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let f = Field2D::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(f.shape(), GridShape::new(2, 3));
        assert_eq!(f.get(0, 2), 3.0);
        assert_eq!(f.get(1, 0), 4.0);
        assert_eq!(f.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Field2D::from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            GridError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let f = Field2D::from_rows(&rows).unwrap();
        assert!(f.shape().is_empty());
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let err = Field2D::from_data(vec![0.0; 5], GridShape::new(2, 3)).unwrap_err();
        assert!(matches!(
            err,
            GridError::DataLength {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_set_get_and_count_nan() {
        let mut f = Field2D::zeros(GridShape::new(2, 2)).unwrap();
        f.set(1, 1, f64::NAN);
        f.set(0, 1, 7.5);
        assert_eq!(f.get(0, 1), 7.5);
        assert_eq!(f.count_nan(), 1);

        f.fill(1.0);
        assert_eq!(f.count_nan(), 0);
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let huge = GridShape::new(usize::MAX / 2 + 1, 2);
        let overflow = GridError::ShapeOverflow {
            rows: usize::MAX / 2 + 1,
            cols: 2,
        };

        assert_eq!(Field2D::from_data(Vec::new(), huge).unwrap_err(), overflow);
        assert_eq!(Field2D::filled(huge, 1.0).unwrap_err(), overflow);
        assert_eq!(Field2D::zeros(huge).unwrap_err(), overflow);
    }

    #[test]
    fn test_map_keeps_shape() {
        let f = Field2D::from_rows(&[[1.0, -2.0, 3.0]]).unwrap();
        let doubled = f.map(|v| 2.0 * v);
        assert_eq!(doubled.shape(), f.shape());
        assert_eq!(doubled.data(), &[2.0, -4.0, 6.0]);
    }

    #[test]
    fn test_indexed_iter_order() {
        let f = Field2D::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let cells: Vec<_> = f.indexed_iter().collect();
        assert_eq!(
            cells,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)]
        );
    }
}
