use alloc::vec::Vec;
use core::ops::{Add, Mul, Sub};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

/// Dot product of two equal-length, non-empty slices.
///
/// ```
/// use olsmat::matrix::dot;
/// assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]).unwrap(), 32);
/// assert!(dot(&[1, 2], &[1, 2, 3]).is_err());
/// assert!(dot::<f64>(&[], &[]).is_err());
/// ```
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> Result<T, MatrixError> {
    if a.len() != b.len() {
        return Err(MatrixError::DimensionMismatch {
            expected: (a.len(), 1),
            got: (b.len(), 1),
        });
    }
    if a.is_empty() {
        return Err(MatrixError::DimensionMismatch {
            expected: (1, 1),
            got: (0, 1),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

// ── Element-wise combination ────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Combine two same-shaped matrices element by element.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let h = Matrix::column_vector(&[1.5_f64, 2.0]);
    /// let h2 = h.combine(&h, |a, b| a * b).unwrap();
    /// assert_eq!(h2, Matrix::column_vector(&[2.25, 4.0]));
    /// ```
    pub fn combine(&self, rhs: &Self, op: impl Fn(T, T) -> T) -> Result<Self, MatrixError> {
        rhs.require_shape(self.shape()).map_err(|_| MatrixError::DimensionMismatch {
            expected: self.shape(),
            got: rhs.shape(),
        })?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Matrix product `self * rhs`.
    ///
    /// Each cell is the [`dot`] product of a row of `self` and a column of
    /// `rhs`, so an empty inner dimension is rejected as well.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.shape(),
            });
        }
        let m = self.nrows;
        let p = rhs.ncols;
        let rhs_cols: Vec<Vec<T>> = rhs.columns();
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            let row = self.row(i);
            for col in &rhs_cols {
                data.push(dot(row, col)?);
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Multiply every element by `k`. Always succeeds.
    pub fn scale(&self, k: T) -> Self {
        self.map(|x| x * k)
    }

    /// Gramian `Aᵀ·A`, the normal-equations matrix of a design matrix.
    ///
    /// Always square (`ncols x ncols`) and symmetric.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let x = Matrix::from_rows(&[[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(x.gramian(), Matrix::from_rows(&[[35, 44], [44, 56]]));
    /// ```
    pub fn gramian(&self) -> Self {
        let n = self.ncols;
        let mut g = Self::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                let mut s = T::zero();
                for row in self.rows() {
                    s = s + row[i] * row[j];
                }
                g[(i, j)] = s;
                g[(j, i)] = s;
            }
        }
        g
    }

    /// Cross-moment `Aᵀ·y` of a design matrix and a response.
    ///
    /// Fails unless `y` has as many rows as `self`.
    pub fn moment(&self, y: &Self) -> Result<Self, MatrixError> {
        if y.nrows != self.nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows, y.ncols),
                got: y.shape(),
            });
        }
        let mut m = Self::zeros(self.ncols, y.ncols);
        for (xr, yr) in self.rows().zip(y.rows()) {
            for i in 0..self.ncols {
                for j in 0..y.ncols {
                    m[(i, j)] = m[(i, j)] + xr[i] * yr[j];
                }
            }
        }
        Ok(m)
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul(&rhs)
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                #[inline]
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> { rhs.scale(self) }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                #[inline]
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> { rhs.scale(self) }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);
