use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::LinalgError;

/// A dense, row-major matrix of `f64` values.
///
/// The matrix carries its own shape and every access through [`Index`] is bounds checked
/// against both dimensions, so an out of range column never silently reads into the next row.
///
/// Example:
///
/// ```
/// use tracc_linalg::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 6.0);
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_shape_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Create a square matrix with `diagonal` on its main diagonal and zeros elsewhere.
    pub fn from_diagonal(diagonal: &[f64]) -> Self {
        let n = diagonal.len();
        Self::from_shape_fn(n, n, |i, j| if i == j { diagonal[i] } else { 0.0 })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidShape`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, LinalgError> {
        if data.len() != rows * cols {
            return Err(LinalgError::InvalidShape {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix by evaluating `f(row, col)` for every element.
    pub fn from_shape_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Create a matrix from a slice of fixed-size rows.
    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Self {
        Self {
            rows: rows.len(),
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Create an `n x 1` column vector.
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get a reference to the element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a mutable reference to the element at `(row, col)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(
            row < self.rows,
            "row {row} out of bounds for matrix with {} rows",
            self.rows
        );
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Copy one column into a new vector.
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(
            col < self.cols,
            "column {col} out of bounds for matrix with {} columns",
            self.cols
        );
        (0..self.rows).map(|i| self[(i, col)]).collect()
    }

    /// Copy the `rows x cols` block whose top-left corner is `(row, col)`.
    pub fn block(&self, row: usize, col: usize, rows: usize, cols: usize) -> Matrix {
        assert!(
            row + rows <= self.rows && col + cols <= self.cols,
            "block {rows}x{cols} at ({row}, {col}) does not fit in a {}x{} matrix",
            self.rows,
            self.cols
        );
        Matrix::from_shape_fn(rows, cols, |i, j| self[(row + i, col + j)])
    }

    /// Apply `f` to every element, returning a new matrix of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Whether every element is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Largest absolute element-wise difference to `other`.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        assert_eq!(
            self.shape(),
            other.shape(),
            "cannot compare a {}x{} matrix with a {}x{} matrix",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    /// One row per line, each element right aligned with six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for v in self.row(i) {
                write!(f, " {v:10.6} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape_vec() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        Ok(())
    }

    #[test]
    fn test_from_shape_vec_invalid() {
        let res = Matrix::from_shape_vec(2, 3, vec![1.0; 5]);
        assert_eq!(
            res,
            Err(LinalgError::InvalidShape {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.get(0, 2), Some(&0.0));
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_column_out_of_bounds() {
        let m = Matrix::zeros(2, 2);
        // (0, 2) would alias (1, 0) in the flat buffer
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_block_and_column() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = m.block(1, 1, 2, 2);
        assert_eq!(b, Matrix::from_rows(&[[5.0, 6.0], [8.0, 9.0]]));
        assert_eq!(m.column(2), vec![3.0, 6.0, 9.0]);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_column_vector() {
        let v = Matrix::column_vector(&[1.0, 2.0, 3.0]);
        assert_eq!(v.shape(), (3, 1));
        assert_eq!(v[(2, 0)], 3.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[[1.0, -0.5]]);
        assert_eq!(format!("{m}"), "   1.000000   -0.500000 \n");
    }
}
