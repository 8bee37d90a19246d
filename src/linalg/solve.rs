use crate::matrix::{Matrix, MatrixError};
use crate::traits::FloatScalar;

use super::lu::LuDecomposition;

fn require_rhs<T>(tri: &Matrix<T>, b: &Matrix<T>) -> Result<(), MatrixError> {
    if b.nrows() != tri.nrows() {
        return Err(MatrixError::DimensionMismatch {
            expected: (tri.nrows(), b.ncols()),
            got: b.shape(),
        });
    }
    Ok(())
}

/// Solve `L·x = b` by forward substitution, `L` lower-triangular.
///
/// Entries above the diagonal of `l` are ignored. Each column of `b` is
/// solved independently.
pub fn forward_solve<T: FloatScalar>(l: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    l.require_square()?;
    require_rhs(l, b)?;
    let n = l.nrows();
    let mut x = b.clone();
    for k in 0..b.ncols() {
        for i in 0..n {
            let mut s = x[(i, k)];
            for j in 0..i {
                s = s - l[(i, j)] * x[(j, k)];
            }
            x[(i, k)] = s / l[(i, i)];
        }
    }
    Ok(x)
}

/// Solve `U·x = b` by backward substitution, `U` upper-triangular.
///
/// Entries below the diagonal of `u` are ignored.
pub fn backward_solve<T: FloatScalar>(u: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    u.require_square()?;
    require_rhs(u, b)?;
    let n = u.nrows();
    let mut x = b.clone();
    for k in 0..b.ncols() {
        for i in (0..n).rev() {
            let mut s = x[(i, k)];
            for j in (i + 1)..n {
                s = s - u[(i, j)] * x[(j, k)];
            }
            x[(i, k)] = s / u[(i, i)];
        }
    }
    Ok(x)
}

/// Solve `A·x = b`, reusing `lu` when the caller already factored `A`.
///
/// `lu` must be the factorization of `a`; it is not re-validated.
pub fn solve<T: FloatScalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    lu: Option<&LuDecomposition<T>>,
) -> Result<Matrix<T>, MatrixError> {
    match lu {
        Some(lu) => lu.solve(b),
        None => LuDecomposition::new(a)?.solve(b),
    }
}

/// Inverse of a square matrix through one shared LU factorization.
pub fn inverse<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    LuDecomposition::new(a)?.inverse()
}

/// Determinant of a square matrix.
///
/// Sizes 0, 1 and 2 use closed forms; larger matrices go through LU.
pub fn determinant<T: FloatScalar>(a: &Matrix<T>) -> Result<T, MatrixError> {
    a.require_square()?;
    match a.nrows() {
        0 => Ok(T::zero()),
        1 => Ok(a[(0, 0)]),
        2 => Ok(a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)]),
        _ => Ok(LuDecomposition::new(a)?.det()),
    }
}

// ── Convenience methods ─────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<LuDecomposition<T>, MatrixError> {
        LuDecomposition::new(self)
    }

    /// Solve `self · x = b`.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let a = Matrix::from_rows(&[[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
    /// let b = Matrix::column_vector(&[8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
    /// assert!((x[(1, 0)] - 3.0).abs() < 1e-12);
    /// assert!((x[(2, 0)] + 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Self) -> Result<Self, MatrixError> {
        solve(self, b, None)
    }

    /// Matrix inverse.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let inv = a.inverse().unwrap();
    /// let id = (&a * &inv).unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        inverse(self)
    }

    /// Determinant.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let a = Matrix::from_rows(&[[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    /// assert!((a.det().unwrap() + 306.0).abs() < 1e-10);
    /// ```
    pub fn det(&self) -> Result<T, MatrixError> {
        determinant(self)
    }
}
