use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Partial (added-variable) regression for one regressor.
///
/// Holds the residuals of `y` and of column `index`, each regressed on the
/// other columns of the design. Plotting one against the other isolates
/// the contribution of that column.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialRegression<T> {
    index: usize,
    y_residuals: Matrix<T>,
    x_residuals: Matrix<T>,
}

impl<T: FloatScalar> PartialRegression<T> {
    pub(crate) fn new(index: usize, y_residuals: Matrix<T>, x_residuals: Matrix<T>) -> Self {
        Self {
            index,
            y_residuals,
            x_residuals,
        }
    }

    /// Column of the design matrix this regression isolates.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Residuals of `y` on the other columns (n×1).
    pub fn y_residuals(&self) -> &Matrix<T> {
        &self.y_residuals
    }

    /// Residuals of column `index` on the other columns (n×1).
    pub fn x_residuals(&self) -> &Matrix<T> {
        &self.x_residuals
    }

    /// Slope of `y_residuals` on `x_residuals` through the origin.
    ///
    /// Equals the full model's coefficient for this column.
    pub fn slope(&self) -> T {
        let (sxy, sxx) = self
            .x_residuals
            .as_slice()
            .iter()
            .zip(self.y_residuals.as_slice())
            .fold((T::zero(), T::zero()), |(sxy, sxx), (&x, &y)| (sxy + x * y, sxx + x * x));
        sxy / sxx
    }
}
