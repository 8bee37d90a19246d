use alloc::vec::Vec;

use crate::matrix::{dot, Matrix, MatrixError};
use crate::traits::FloatScalar;

use super::RegressionError;

/// Mean of a column vector's elements.
pub(crate) fn mean<T: FloatScalar>(v: &Matrix<T>) -> T {
    let s = v.as_slice().iter().fold(T::zero(), |acc, &x| acc + x);
    s / T::count(v.as_slice().len())
}

/// Σ (vᵢ − center)².
pub(crate) fn sum_of_squares<T: FloatScalar>(v: &Matrix<T>, center: T) -> T {
    v.as_slice()
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - center) * (x - center))
}

/// Least-squares fit of `y` on the columns of `x` via the normal equations.
///
/// Only the point estimates; no degrees-of-freedom requirement beyond
/// `n >= p`, so an exactly determined system fits with zero residuals.
///
/// ```
/// use olsmat::{LeastSquares, Matrix};
///
/// let x = Matrix::from_rows(&[[2.0_f64, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
/// let y = Matrix::column_vector(&[4.0, 6.0, 8.0]);
/// let fit = LeastSquares::fit(&x, &y).unwrap();
///
/// assert_eq!(fit.beta(), &Matrix::column_vector(&[2.0, 3.0, 4.0]));
/// assert_eq!(fit.residuals(), &Matrix::zeros(3, 1));
/// assert_eq!(fit.r_squared(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares<T> {
    beta: Matrix<T>,
    residuals: Matrix<T>,
    predicted: Matrix<T>,
    normal_inverse: Matrix<T>,
    mss: T,
    tss: T,
    ess: T,
}

impl<T: FloatScalar> LeastSquares<T> {
    /// Fit `y` (n×1) on `x` (n×p).
    ///
    /// Fails on a response that is not an n×1 column, on `n < p`, and with
    /// [`MatrixError::Singular`] when `XᵀX` cannot be inverted.
    pub fn fit(x: &Matrix<T>, y: &Matrix<T>) -> Result<Self, RegressionError> {
        let n = x.nrows();
        let p = x.ncols();
        y.require_shape((n, 1))?;
        if n < p {
            return Err(RegressionError::InsufficientData {
                observations: n,
                parameters: p,
            });
        }

        let normal_inverse = x.gramian().inverse()?;
        let beta = normal_inverse.matmul(&x.moment(y)?)?;

        let coefficients = beta.as_slice();
        let residuals = x
            .rows()
            .zip(y.as_slice())
            .map(|(row, &yi)| Ok(yi - dot(row, coefficients)?))
            .collect::<Result<Vec<T>, MatrixError>>()?;
        let residuals = Matrix::column_vector(&residuals);
        let predicted = x.matmul(&beta)?;

        let y_mean = mean(y);
        let mss = sum_of_squares(&predicted, y_mean);
        let tss = sum_of_squares(y, y_mean);
        let ess = sum_of_squares(&residuals, mean(&residuals));

        Ok(Self {
            beta,
            residuals,
            predicted,
            normal_inverse,
            mss,
            tss,
            ess,
        })
    }

    /// Coefficients β (p×1).
    pub fn beta(&self) -> &Matrix<T> {
        &self.beta
    }

    /// Residuals `y − X·β` (n×1).
    pub fn residuals(&self) -> &Matrix<T> {
        &self.residuals
    }

    /// Fitted values `X·β` (n×1).
    pub fn predicted(&self) -> &Matrix<T> {
        &self.predicted
    }

    /// `(XᵀX)⁻¹`, the unscaled coefficient covariance.
    pub fn normal_inverse(&self) -> &Matrix<T> {
        &self.normal_inverse
    }

    /// Model sum of squares, fitted values about the mean of `y`.
    pub fn mss(&self) -> T {
        self.mss
    }

    /// Total sum of squares of `y` about its mean.
    pub fn tss(&self) -> T {
        self.tss
    }

    /// Error sum of squares, residuals about their mean.
    pub fn ess(&self) -> T {
        self.ess
    }

    /// Coefficient of determination `mss / tss`. NaN for a constant response.
    pub fn r_squared(&self) -> T {
        self.mss / self.tss
    }

    /// Predictions `x_new·β` for new rows with the same columns as the fit.
    pub fn predict(&self, x_new: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if x_new.ncols() != self.beta.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (x_new.nrows(), self.beta.nrows()),
                got: x_new.shape(),
            });
        }
        x_new.matmul(&self.beta)
    }
}
