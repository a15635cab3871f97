//! Dense row-major matrix storage and its delimited text form.
//!
//! The metric only ever reads matrices, so everything here is either
//! construction or read-only access.

pub mod text;

use std::ops::Index;

use crate::error::{ConcordanceError, Result};

/// Dense matrix of `f64`, stored row-major in one contiguous buffer.
///
/// Element `(i, j)` lives at `data[i * cols + j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Wrap a row-major buffer.
    ///
    /// # Errors
    ///
    /// [`ConcordanceError::BufferSize`] if `data.len() != rows * cols`, or if
    /// exactly one of `rows` and `cols` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use triplet_concordance::Matrix;
    ///
    /// let m = Matrix::new(vec![1.0, 2.0, 3.0,
    ///                          4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) || (rows == 0) != (cols == 0) {
            return Err(ConcordanceError::BufferSize {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = rows.first().ok_or(ConcordanceError::EmptyInput)?.len();
        if expected == 0 {
            return Err(ConcordanceError::BufferSize {
                rows: rows.len(),
                cols: 0,
                len: 0,
            });
        }
        let mut data = Vec::with_capacity(rows.len() * expected);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ConcordanceError::RaggedRow {
                    line: i as u64 + 1,
                    expected,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols: expected,
        })
    }

    /// Build a `rows × cols` matrix by evaluating `f(i, j)` for each cell.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `rows` and `cols` is zero.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        assert_eq!(
            rows == 0,
            cols == 0,
            "{}x{}: a matrix with rows must have columns",
            rows,
            cols
        );
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at row `i`, column `j`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_buffer_length() {
        let err = Matrix::new(vec![1.0; 5], 2, 3).unwrap_err();
        assert!(matches!(
            err,
            ConcordanceError::BufferSize {
                rows: 2,
                cols: 3,
                len: 5
            }
        ));
    }

    #[test]
    fn from_rows_is_row_major() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.get(2, 1), 6.0);
        assert!(!m.is_square());
    }

    #[test]
    fn half_empty_shapes_are_rejected() {
        assert!(matches!(
            Matrix::new(Vec::new(), 3, 0),
            Err(ConcordanceError::BufferSize { rows: 3, cols: 0, .. })
        ));
        assert!(matches!(
            Matrix::new(Vec::new(), 0, 2),
            Err(ConcordanceError::BufferSize { rows: 0, cols: 2, .. })
        ));
        assert!(matches!(
            Matrix::from_rows(vec![Vec::new(), Vec::new()]),
            Err(ConcordanceError::BufferSize { rows: 2, cols: 0, .. })
        ));
        assert_eq!(Matrix::new(Vec::new(), 0, 0).unwrap().shape(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "must have columns")]
    fn from_fn_panics_on_half_empty_shape() {
        Matrix::from_fn(3, 0, |_, _| 0.0);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            ConcordanceError::RaggedRow {
                line: 2,
                expected: 2,
                found: 1
            }
        ));

        let err = Matrix::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(err, ConcordanceError::EmptyInput));
    }

    #[test]
    fn from_fn_matches_index() {
        let m = Matrix::from_fn(4, 4, |i, j| (i * 10 + j) as f64);
        assert!(m.is_square());
        assert_eq!(m[(3, 2)], 32.0);
        assert_eq!(m.get(0, 3), 3.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_panics_out_of_bounds() {
        let m = Matrix::from_fn(2, 2, |_, _| 0.0);
        m.get(2, 0);
    }
}
