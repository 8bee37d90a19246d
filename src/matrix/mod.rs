mod ops;
mod square;

pub use ops::dot;
pub use square::MAX_COFACTOR_DIM;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use thiserror::Error;

use crate::traits::Scalar;

/// Errors from matrix construction, arithmetic and factorization.
///
/// ```
/// use olsmat::{Matrix, MatrixError};
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
/// let b = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0]]);
/// assert_eq!(
///     (&a + &b).unwrap_err(),
///     MatrixError::DimensionMismatch { expected: (2, 2), got: (1, 3) },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible. Shapes are `(rows, cols)`.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Operation is only defined for square matrices.
    #[error("square matrix required, got {rows}x{cols}")]
    SquareMatrixRequired { rows: usize, cols: usize },
    /// Matrix exceeds the size an algorithm supports.
    #[error("{dim}x{dim} matrix exceeds the supported maximum of {max}x{max}")]
    TooLarge { dim: usize, max: usize },
    /// A solve hit a zero (or negligible) pivot.
    #[error("matrix is singular: negligible pivot at row {pivot}")]
    Singular { pivot: usize },
}

/// Dense, heap-allocated matrix with row-major `Vec<T>` storage.
///
/// Matrices are plain values: every transforming operation returns a new
/// matrix, and only cell assignment and [`append_row`](Matrix::append_row) /
/// [`append_column`](Matrix::append_column) mutate in place. Cloning is a
/// deep copy, so a clone never observes later mutation of the original.
///
/// # Examples
///
/// ```
/// use olsmat::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::identity(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Build a matrix from a sequence of rows.
    ///
    /// The column count is the length of the *shortest* row; longer rows are
    /// truncated. Ragged input is therefore lossy, never an error.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]]);
    /// assert_eq!(m.ncols(), 2);
    /// assert_eq!(m.row(2), &[6, 7]);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let ncols = rows.iter().map(|r| r.as_ref().len()).min().unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for r in rows {
            data.extend_from_slice(&r.as_ref()[..ncols]);
        }
        Self {
            data,
            nrows: rows.len(),
            ncols,
        }
    }

    /// Build a matrix from a sequence of columns.
    ///
    /// Same truncation rule as [`from_rows`](Matrix::from_rows): the row
    /// count is the length of the shortest column.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_columns(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.row(1), &[2.0, 5.0]);
    /// ```
    pub fn from_columns<C: AsRef<[T]>>(columns: &[C]) -> Self {
        Self::from_rows(columns).transpose()
    }

    /// Build an `n x 1` column matrix from a slice.
    pub fn column_vector(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            nrows: values.len(),
            ncols: 1,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m, Matrix::identity(3));
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Checked element access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            self.data.get(row * self.ncols + col)
        } else {
            None
        }
    }

    /// Row `index` as a slice. Panics if out of range.
    #[inline]
    pub fn row(&self, index: usize) -> &[T] {
        assert!(index < self.nrows, "row {} out of range for {} rows", index, self.nrows);
        &self.data[index * self.ncols..(index + 1) * self.ncols]
    }

    /// Iterator over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Swap two rows in place.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.row(0), &[3.0, 4.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }

    /// Apply a function to every element, producing a matrix of a
    /// possibly different element type.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Column `index` as an owned vector. Panics if out of range.
    pub fn column(&self, index: usize) -> Vec<T> {
        assert!(index < self.ncols, "column {} out of range for {} columns", index, self.ncols);
        (0..self.nrows).map(|i| self.data[i * self.ncols + index]).collect()
    }

    /// All columns as owned vectors.
    pub fn columns(&self) -> Vec<Vec<T>> {
        (0..self.ncols).map(|j| self.column(j)).collect()
    }

    /// Transpose: an `ncols x nrows` matrix. Always succeeds.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Self {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// Main diagonal as an `n x 1` column matrix.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]);
    /// assert_eq!(m.diagonal().unwrap(), Matrix::column_vector(&[1, 4]));
    /// assert!(Matrix::from_rows(&[[1, 2]]).diagonal().is_err());
    /// ```
    pub fn diagonal(&self) -> Result<Self, MatrixError> {
        self.require_square()?;
        let data = (0..self.nrows).map(|i| self.data[i * self.ncols + i]).collect();
        Ok(Self {
            data,
            nrows: self.nrows,
            ncols: 1,
        })
    }

    /// Copy of the matrix with column `index` removed. Panics if out of range.
    pub fn remove_column(&self, index: usize) -> Self {
        assert!(index < self.ncols, "column {} out of range for {} columns", index, self.ncols);
        let mut data = Vec::with_capacity(self.nrows * (self.ncols - 1));
        for row in self.rows() {
            data.extend(row.iter().enumerate().filter(|&(j, _)| j != index).map(|(_, &x)| x));
        }
        Self {
            data,
            nrows: self.nrows,
            ncols: self.ncols - 1,
        }
    }

    /// Append a row in place.
    ///
    /// Fails, leaving the matrix untouched, unless `row.len() == ncols`.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let mut m = Matrix::from_rows(&[[1, 2]]);
    /// m.append_row(&[3, 4]).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert!(m.append_row(&[5]).is_err());
    /// assert_eq!(m.nrows(), 2);
    /// ```
    pub fn append_row(&mut self, row: &[T]) -> Result<(), MatrixError> {
        if row.len() != self.ncols {
            return Err(MatrixError::DimensionMismatch {
                expected: (1, self.ncols),
                got: (1, row.len()),
            });
        }
        self.data.extend_from_slice(row);
        self.nrows += 1;
        Ok(())
    }

    /// Append a column in place.
    ///
    /// Fails, leaving the matrix untouched, unless `column.len() == nrows`.
    pub fn append_column(&mut self, column: &[T]) -> Result<(), MatrixError> {
        if column.len() != self.nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows, 1),
                got: (column.len(), 1),
            });
        }
        let ncols = self.ncols + 1;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for (i, &value) in column.iter().enumerate() {
            data.extend_from_slice(&self.data[i * self.ncols..(i + 1) * self.ncols]);
            data.push(value);
        }
        self.data = data;
        self.ncols = ncols;
        Ok(())
    }

    #[inline]
    pub(crate) fn require_square(&self) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::SquareMatrixRequired {
                rows: self.nrows,
                cols: self.ncols,
            })
        }
    }

    #[inline]
    pub(crate) fn require_shape(&self, expected: (usize, usize)) -> Result<(), MatrixError> {
        if self.shape() == expected {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                expected,
                got: self.shape(),
            })
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.nrows && col < self.ncols, "index ({row}, {col}) out of range");
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.nrows && col < self.ncols, "index ({row}, {col}) out of range");
        &mut self.data[row * self.ncols + col]
    }
}
