use alloc::vec;

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

/// Largest dimension accepted by [`Matrix::det_cofactor`].
///
/// The expansion keeps one minor per column subset, so memory grows as `2^n`.
pub const MAX_COFACTOR_DIM: usize = 24;

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Determinant by cofactor (Laplace) expansion along the first row.
    ///
    /// Works for any [`Scalar`], including integers, and needs no division.
    /// Sizes 0, 1 and 2 use closed forms (the empty determinant is defined
    /// as 0). Larger matrices expand every minor along its top row; minors
    /// are shared between branches by memoising over the set of remaining
    /// columns, which keeps the evaluation iterative at `O(n·2^n)` cost.
    /// Prefer [`det`](Matrix::det) for floating-point matrices.
    ///
    /// Fails with [`MatrixError::TooLarge`] if `n > MAX_COFACTOR_DIM`.
    ///
    /// ```
    /// use olsmat::Matrix;
    /// let a = Matrix::from_rows(&[[0, 1, 2], [4, 6, 2], [9, 3, 5]]);
    /// assert_eq!(a.det_cofactor().unwrap(), -86);
    /// ```
    pub fn det_cofactor(&self) -> Result<T, MatrixError> {
        self.require_square()?;
        let n = self.nrows;
        match n {
            0 => return Ok(T::zero()),
            1 => return Ok(self[(0, 0)]),
            2 => return Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => {}
        }
        if n > MAX_COFACTOR_DIM {
            return Err(MatrixError::TooLarge {
                dim: n,
                max: MAX_COFACTOR_DIM,
            });
        }

        // minor[cols] = determinant of the bottom |cols| rows restricted to `cols`.
        let full = (1usize << n) - 1;
        let mut minor = vec![T::zero(); full + 1];
        minor[0] = T::one();
        for cols in 1..=full {
            let row = n - cols.count_ones() as usize;
            let mut acc = T::zero();
            let mut position = 0;
            for j in 0..n {
                let bit = 1usize << j;
                if cols & bit == 0 {
                    continue;
                }
                let term = self[(row, j)] * minor[cols & !bit];
                acc = if position % 2 == 0 { acc + term } else { acc - term };
                position += 1;
            }
            minor[cols] = acc;
        }
        Ok(minor[full])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn det_two_by_two() {
        let a = Matrix::from_rows(&[[2, 3], [4, 5]]);
        assert_eq!(a.det_cofactor().unwrap(), -2);
    }

    #[test]
    fn det_one_by_one() {
        assert_eq!(Matrix::from_rows(&[[1]]).det_cofactor().unwrap(), 1);
    }

    #[test]
    fn det_empty_is_zero() {
        let m = Matrix::<f64>::zeros(0, 0);
        assert_eq!(m.det_cofactor().unwrap(), 0.0);
    }

    #[test]
    fn det_three_by_three() {
        let a = Matrix::from_rows(&[[0, 1, 2], [4, 6, 2], [9, 3, 5]]);
        assert_eq!(a.det_cofactor().unwrap(), -86);
        let b = Matrix::from_rows(&[[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(b.det_cofactor().unwrap(), -306);
    }

    #[test]
    fn det_four_by_four() {
        let a = Matrix::from_rows(&[
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [2, 6, 4, 1],
            [3, 1, 9, 2],
        ]);
        // Row swap flips the sign.
        let mut b = a.clone();
        b.swap_rows(0, 3);
        let d = a.det_cofactor().unwrap();
        assert_eq!(b.det_cofactor().unwrap(), -d);
        assert_eq!(d, -400);
    }

    #[test]
    fn det_triangular_is_diagonal_product() {
        let a = Matrix::from_rows(&[
            [2, 7, 1, 8, 2],
            [0, 3, 1, 4, 1],
            [0, 0, 5, 9, 2],
            [0, 0, 0, 1, 6],
            [0, 0, 0, 0, 4],
        ]);
        assert_eq!(a.det_cofactor().unwrap(), 2 * 3 * 5 * 1 * 4);
    }

    #[test]
    fn det_requires_square() {
        let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(
            a.det_cofactor().unwrap_err(),
            MatrixError::SquareMatrixRequired { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn det_beyond_cofactor_limit_is_an_error() {
        let a = Matrix::<i64>::identity(MAX_COFACTOR_DIM + 1);
        assert_eq!(
            a.det_cofactor().unwrap_err(),
            MatrixError::TooLarge { dim: 25, max: 24 }
        );
    }

    #[test]
    fn trace() {
        let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(a.trace(), 15);
    }
}
