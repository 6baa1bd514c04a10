//! Dense row-major matrix type.
//!
//! [`Matrix`] is the sole data structure of the Frontier core: a fixed-shape
//! 2D container of `f64` backed by a flat `Vec`, element `(i, j)` stored at
//! offset `i * cols + j`. Every transform (slicing, transpose, row/column
//! extraction, arithmetic) returns a new independent matrix; nothing aliases
//! the backing storage of its input.

use crate::error::{MatrixError, Result};
use std::fmt;

/// Dense row-major matrix of `f64`.
///
/// Invariant: `data.len() == rows * cols` at all times. Constructors that
/// would violate it fail with [`MatrixError::ShapeMismatch`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from a flat row-major element vector.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the matrix holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Read element `(row, col)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfBounds`] for `row >= rows` or
    /// `col >= cols`; the boundary itself is rejected, never read.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Mutable reference to element `(row, col)`, same bounds contract as
    /// [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_bounds(row, col)?;
        Ok(&mut self.data[row * self.cols + col])
    }

    /// Write element `(row, col)`, same bounds contract as [`Matrix::get`].
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Copy of row `i` as a new `1 x cols` matrix.
    pub fn row(&self, i: usize) -> Result<Self> {
        self.check_bounds(i, 0)?;
        let start = i * self.cols;
        Ok(Self {
            rows: 1,
            cols: self.cols,
            data: self.data[start..start + self.cols].to_vec(),
        })
    }

    /// Copy of column `j` as a new `rows x 1` matrix.
    pub fn column(&self, j: usize) -> Result<Self> {
        self.check_bounds(0, j)?;
        let data = (0..self.rows)
            .map(|i| self.data[i * self.cols + j])
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: 1,
            data,
        })
    }

    /// Copy the half-open sub-block `[row_beg, row_end) x [col_beg, col_end)`
    /// into a new `(row_end - row_beg) x (col_end - col_beg)` matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfBounds`] if either range is reversed
    /// or its end bound exceeds the matrix extent. Empty ranges are valid.
    pub fn slice(
        &self,
        row_beg: usize,
        row_end: usize,
        col_beg: usize,
        col_end: usize,
    ) -> Result<Self> {
        if row_beg > row_end || col_beg > col_end || row_end > self.rows || col_end > self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: row_end,
                col: col_end,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity((row_end - row_beg) * (col_end - col_beg));
        for i in row_beg..row_end {
            data.extend_from_slice(&self.data[i * self.cols + col_beg..i * self.cols + col_end]);
        }
        Ok(Self {
            rows: row_end - row_beg,
            cols: col_end - col_beg,
            data,
        })
    }

    /// Reinterpret the backing storage with a new shape.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] unless
    /// `new_rows * new_cols` equals the current element count.
    pub fn reshape(&mut self, new_rows: usize, new_cols: usize) -> Result<()> {
        if new_rows * new_cols != self.data.len() {
            return Err(MatrixError::ShapeMismatch {
                len: self.data.len(),
                rows: new_rows,
                cols: new_cols,
            });
        }
        self.rows = new_rows;
        self.cols = new_cols;
        Ok(())
    }

    /// Append the rows of `other` below this matrix, updating the shape in
    /// the same call. Appending to an element-less matrix adopts the column
    /// count of `other`.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] on differing column counts.
    pub fn append_rows(&mut self, other: &Self) -> Result<()> {
        if self.data.is_empty() && self.rows == 0 {
            self.cols = other.cols;
        } else if self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        self.data.extend_from_slice(&other.data);
        self.rows += other.rows;
        Ok(())
    }

    /// New `cols x rows` matrix with `out[(j, i)] = self[(i, j)]`.
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    fn check_same_shape(&self, rhs: &Self) -> Result<()> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        Ok(())
    }

    /// Elementwise sum, returning a new matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] on differing shapes.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.checked_add_assign(rhs)?;
        Ok(out)
    }

    /// Elementwise difference, returning a new matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] on differing shapes.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.checked_sub_assign(rhs)?;
        Ok(out)
    }

    /// In-place elementwise addition.
    pub fn checked_add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.check_same_shape(rhs)?;
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a += b;
        }
        Ok(())
    }

    /// In-place elementwise subtraction.
    pub fn checked_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.check_same_shape(rhs)?;
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a -= b;
        }
        Ok(())
    }

    /// Matrix product `self * rhs`.
    ///
    /// Plain row-major triple loop; for each output element the terms are
    /// accumulated in increasing inner-index order.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] unless
    /// `self.cols == rhs.rows`.
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lik = self.data[i * self.cols + k];
                for j in 0..rhs.cols {
                    out.data[i * rhs.cols + j] += lik * rhs.data[k * rhs.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Dot product of two matrices interpreted as flattened vectors.
    ///
    /// Only the total element counts must agree; the system exercises this
    /// on row/column vectors, but the flattened interpretation over general
    /// shapes is part of the contract.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] on differing element
    /// counts.
    pub fn dot(&self, rhs: &Self) -> Result<f64> {
        if self.data.len() != rhs.data.len() {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        Ok(self.data.iter().zip(&rhs.data).map(|(a, b)| a * b).sum())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{} ", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_2x3() -> Matrix {
        Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap()
    }

    #[test]
    fn test_from_vec_rejects_bad_shape() {
        let err = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                len: 3,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn test_zeros_shape_and_content() {
        let m = Matrix::zeros(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_get_rejects_boundary() {
        let m = fixture_2x3();
        // Post-fix contract: the boundary index itself is out of bounds.
        assert!(m.get(2, 0).is_err());
        assert!(m.get(0, 3).is_err());
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
    }

    #[test]
    fn test_set_and_get_mut() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, 7.5).unwrap();
        *m.get_mut(1, 0).unwrap() = -2.0;
        assert_eq!(m.get(0, 1).unwrap(), 7.5);
        assert_eq!(m.get(1, 0).unwrap(), -2.0);
        assert!(m.set(2, 0, 1.0).is_err());
    }

    #[test]
    fn test_row_and_column_extraction() {
        let m = fixture_2x3();
        assert_eq!(
            m.row(0).unwrap(),
            Matrix::from_vec(vec![1.0, 2.0, 3.0], 1, 3).unwrap()
        );
        assert_eq!(
            m.column(1).unwrap(),
            Matrix::from_vec(vec![2.0, 5.0], 2, 1).unwrap()
        );
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
    }

    #[test]
    fn test_slice_top_left_block() {
        let m = Matrix::from_vec(
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            3,
            3,
        )
        .unwrap();
        let block = m.slice(0, 2, 0, 2).unwrap();
        assert_eq!(
            block,
            Matrix::from_vec(vec![1.0, 0.0, 0.0, 1.0], 2, 2).unwrap()
        );
    }

    #[test]
    fn test_slice_bounds() {
        let m = fixture_2x3();
        assert!(m.slice(0, 3, 0, 3).is_err());
        assert!(m.slice(1, 0, 0, 2).is_err());
        let empty = m.slice(1, 1, 0, 3).unwrap();
        assert_eq!(empty.rows(), 0);
        assert_eq!(empty.cols(), 3);
    }

    #[test]
    fn test_reshape_checks_element_count() {
        let mut m = fixture_2x3();
        m.reshape(3, 2).unwrap();
        assert_eq!(m.get(2, 1).unwrap(), 6.0);
        assert!(m.reshape(2, 2).is_err());
    }

    #[test]
    fn test_append_rows_updates_shape_atomically() {
        let mut m = fixture_2x3();
        let extra = Matrix::from_vec(vec![7.0, 8.0, 9.0], 1, 3).unwrap();
        m.append_rows(&extra).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(2).unwrap(), extra);
    }

    #[test]
    fn test_append_rows_onto_empty_adopts_width() {
        let mut m = Matrix::default();
        m.append_rows(&fixture_2x3()).unwrap();
        assert_eq!(m, fixture_2x3());
    }

    #[test]
    fn test_append_rows_rejects_width_mismatch() {
        let mut m = fixture_2x3();
        let narrow = Matrix::zeros(1, 2);
        assert!(m.append_rows(&narrow).is_err());
    }

    #[test]
    fn test_transpose_round_trip() {
        let m = fixture_2x3();
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(2, 1).unwrap(), 6.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_checked_add_sub_round_trip() {
        let a = fixture_2x3();
        let b = Matrix::from_vec(vec![0.5, -1.0, 2.0, 0.0, 3.0, -6.0], 2, 3).unwrap();
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.checked_sub(&b).unwrap(), a);
    }

    #[test]
    fn test_checked_add_rejects_shape_mismatch() {
        let a = fixture_2x3();
        let b = Matrix::zeros(3, 2);
        assert!(a.checked_add(&b).is_err());
        let mut c = a.clone();
        assert!(c.checked_sub_assign(&b).is_err());
        // Failed in-place ops leave the receiver untouched.
        assert_eq!(c, a);
    }

    #[test]
    fn test_matmul_known_product() {
        let a = fixture_2x3();
        let b = Matrix::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(
            c,
            Matrix::from_vec(vec![58.0, 64.0, 139.0, 154.0], 2, 2).unwrap()
        );
        assert!(b.matmul(&b).is_err());
    }

    #[test]
    fn test_dot_flattened_contract() {
        let v = Matrix::from_vec(vec![1.0, 2.0, 3.0], 3, 1).unwrap();
        let w = Matrix::from_vec(vec![4.0, 5.0, 6.0], 1, 3).unwrap();
        // Shapes differ but element counts agree: flattened interpretation.
        assert_eq!(v.dot(&w).unwrap(), 32.0);
        assert!(v.dot(&Matrix::zeros(2, 1)).is_err());
    }

    #[test]
    fn test_dot_self_nonnegative() {
        let v = Matrix::from_vec(vec![-1.0, 0.5, 2.0], 3, 1).unwrap();
        assert!(v.dot(&v).unwrap() >= 0.0);
        let zero = Matrix::zeros(3, 1);
        assert_eq!(zero.dot(&zero).unwrap(), 0.0);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Matrix::from_vec(vec![1.0, 2.0], 1, 2).unwrap();
        let b = Matrix::from_vec(vec![1.0, 2.0 + 1e-15], 1, 2).unwrap();
        assert_ne!(a, b);
        let c = Matrix::from_vec(vec![1.0, 2.0], 2, 1).unwrap();
        // Same elements, different shape.
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_rows_per_line() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(m.to_string(), "1 2 \n3 4 \n");
    }
}
