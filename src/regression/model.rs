use log::debug;

use crate::matrix::{Matrix, MatrixError};
use crate::stats::{ContinuousDistribution, FDistribution, StudentT};
use crate::traits::FloatScalar;

use super::least_squares::LeastSquares;
use super::partial::PartialRegression;
use super::{RegressionError, RegressionOptions, TTestDegreesOfFreedom};

/// Degrees of freedom as a distribution parameter, saturating on overflow.
fn df_u32(df: usize) -> u32 {
    u32::try_from(df).unwrap_or(u32::MAX)
}

/// Ordinary least squares regression of `y` (n×1) on `x` (n×p).
///
/// Everything is computed once at construction from `(x, y)`; the value is
/// immutable afterwards. Column 0 of `x` is the intercept if the caller
/// includes a column of ones.
///
/// # Diagnostics
///
/// With `df = n − p`, residual mean `ē` and mean response `ȳ`:
///
/// | Accessor | Definition |
/// |---|---|
/// | [`mss`](Self::mss) | Σ (ŷᵢ − ȳ)² |
/// | [`tss`](Self::tss) | Σ (yᵢ − ȳ)² |
/// | [`ess`](Self::ess) | Σ (eᵢ − ē)² |
/// | [`r_squared`](Self::r_squared) | mss / tss |
/// | [`adj_r_squared`](Self::adj_r_squared) | 1 − (1 − R²)(n − 1)/df |
/// | [`mse`](Self::mse) | ess / df |
/// | [`std_error`](Self::std_error) | √mse |
/// | [`std_error_of_coeff`](Self::std_error_of_coeff) | √(mse · diag((XᵀX)⁻¹)) |
/// | [`t_values_of_coeff`](Self::t_values_of_coeff) | βⱼ / seⱼ |
/// | [`p_values_of_coeff`](Self::p_values_of_coeff) | two-tailed t test |
/// | [`f_stat`](Self::f_stat) | (mss / (p − 1)) / mse, NaN when p = 1 |
/// | [`f_probability`](Self::f_probability) | upper tail of F(p − 1, df) |
#[derive(Debug, Clone, PartialEq)]
pub struct Regression<T> {
    x: Matrix<T>,
    y: Matrix<T>,
    fit: LeastSquares<T>,
    options: RegressionOptions,
    df: usize,
    r_squared: T,
    adj_r_squared: T,
    mse: T,
    std_error: T,
    std_error_of_coeff: Matrix<T>,
    t_values_of_coeff: Matrix<T>,
    p_values_of_coeff: Matrix<T>,
    f_stat: T,
    f_probability: T,
}

impl<T: FloatScalar> Regression<T> {
    /// Fit with default [`RegressionOptions`].
    pub fn new(x: Matrix<T>, y: Matrix<T>) -> Result<Self, RegressionError> {
        Self::with_options(x, y, RegressionOptions::default())
    }

    /// Fit with explicit options.
    ///
    /// Fails unless `y` is n×1 and `n > p`, and with
    /// [`MatrixError::Singular`] for a collinear design.
    pub fn with_options(
        x: Matrix<T>,
        y: Matrix<T>,
        options: RegressionOptions,
    ) -> Result<Self, RegressionError> {
        let n = x.nrows();
        let p = x.ncols();
        y.require_shape((n, 1))?;
        if n <= p {
            return Err(RegressionError::InsufficientData {
                observations: n,
                parameters: p,
            });
        }
        let df = n - p;
        debug!("regression: n = {}, p = {}, df = {}", n, p, df);

        let fit = LeastSquares::fit(&x, &y)?;

        let one = T::one();
        let df_t = T::count(df);
        let r_squared = fit.r_squared();
        let adj_r_squared = one - (one - r_squared) * T::count(n - 1) / df_t;
        let mse = fit.ess() / df_t;
        let std_error = mse.sqrt();

        let inv = fit.normal_inverse();
        let std_error_of_coeff = Matrix::from_fn(p, 1, |j, _| (mse * inv[(j, j)]).sqrt());
        let t_values_of_coeff = fit
            .beta()
            .combine(&std_error_of_coeff, |b, se| b / se)?;

        let t_df = match options.t_test_df {
            TTestDegreesOfFreedom::Residual => df,
            TTestDegreesOfFreedom::Total => n - 1,
        };
        let t_dist = StudentT::new(df_u32(t_df))?.with_integration(options.integration);
        let p_values_of_coeff = t_values_of_coeff.map(|t| t_dist.cumulative_probability(t));

        let (f_stat, f_probability) = if p > 1 {
            let f_stat = (fit.mss() / T::count(p - 1)) / mse;
            let f_dist = FDistribution::new(df_u32(p - 1), df_u32(df))?
                .with_integration(options.integration);
            (f_stat, f_dist.cumulative_probability(f_stat))
        } else {
            (T::nan(), T::nan())
        };

        Ok(Self {
            x,
            y,
            fit,
            options,
            df,
            r_squared,
            adj_r_squared,
            mse,
            std_error,
            std_error_of_coeff,
            t_values_of_coeff,
            p_values_of_coeff,
            f_stat,
            f_probability,
        })
    }

    /// Design matrix (n×p).
    pub fn x(&self) -> &Matrix<T> {
        &self.x
    }

    /// Response (n×1).
    pub fn y(&self) -> &Matrix<T> {
        &self.y
    }

    /// The underlying least-squares fit.
    pub fn least_squares(&self) -> &LeastSquares<T> {
        &self.fit
    }

    /// Options the model was fitted with.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Coefficients β (p×1).
    pub fn beta(&self) -> &Matrix<T> {
        self.fit.beta()
    }

    /// Residuals `y − X·β` (n×1).
    pub fn residuals(&self) -> &Matrix<T> {
        self.fit.residuals()
    }

    /// Fitted values `X·β` (n×1).
    pub fn predicted(&self) -> &Matrix<T> {
        self.fit.predicted()
    }

    /// Residual degrees of freedom `n − p`.
    pub fn df(&self) -> usize {
        self.df
    }

    /// Model sum of squares, fitted values about the mean of `y`.
    pub fn mss(&self) -> T {
        self.fit.mss()
    }

    /// Total sum of squares of `y` about its mean.
    pub fn tss(&self) -> T {
        self.fit.tss()
    }

    /// Error sum of squares, residuals about their mean.
    pub fn ess(&self) -> T {
        self.fit.ess()
    }

    /// Coefficient of determination `mss / tss`.
    pub fn r_squared(&self) -> T {
        self.r_squared
    }

    /// R² adjusted for the number of parameters: `1 − (n − 1)/(n − p)·(1 − R²)`.
    pub fn adj_r_squared(&self) -> T {
        self.adj_r_squared
    }

    /// Mean squared error `ess / df`.
    pub fn mse(&self) -> T {
        self.mse
    }

    /// Standard error of the regression, `√mse`.
    pub fn std_error(&self) -> T {
        self.std_error
    }

    /// Standard error of each coefficient, `√(mse · diag((XᵀX)⁻¹))` (p×1).
    pub fn std_error_of_coeff(&self) -> &Matrix<T> {
        &self.std_error_of_coeff
    }

    /// t statistic of each coefficient, `β / se` (p×1).
    pub fn t_values_of_coeff(&self) -> &Matrix<T> {
        &self.t_values_of_coeff
    }

    /// Two-tailed p-value of each t statistic (p×1). Degrees of freedom
    /// follow [`RegressionOptions::t_test_df`].
    pub fn p_values_of_coeff(&self) -> &Matrix<T> {
        &self.p_values_of_coeff
    }

    /// F statistic `(mss / (p − 1)) / mse`. NaN when `p = 1`.
    pub fn f_stat(&self) -> T {
        self.f_stat
    }

    /// Upper-tail probability of [`f_stat`](Regression::f_stat) on `(p − 1, n − p)` degrees of freedom.
    pub fn f_probability(&self) -> T {
        self.f_probability
    }

    /// Predictions for new rows of regressors.
    ///
    /// ```
    /// use olsmat::{Matrix, Regression};
    ///
    /// let x = Matrix::from_rows(&[[1.0_f64, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]);
    /// let y = Matrix::column_vector(&[1.1, 2.9, 5.1, 6.9]);
    /// let fit = Regression::new(x, y).unwrap();
    ///
    /// let at_ten = fit.predict(&Matrix::from_rows(&[[1.0, 10.0]])).unwrap();
    /// assert!((at_ten[(0, 0)] - 20.66).abs() < 1e-10);
    /// ```
    pub fn predict(&self, x_new: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.fit.predict(x_new)
    }

    /// Added-variable data for column `index`: residuals of `y` and of that
    /// column, each regressed on the remaining columns.
    ///
    /// Needs at least one other column to regress on.
    pub fn partial_regression(&self, index: usize) -> Result<PartialRegression<T>, RegressionError> {
        let columns = self.x.ncols();
        if index >= columns {
            return Err(RegressionError::ColumnOutOfRange { index, columns });
        }
        debug!("partial regression: column {} of {}", index, columns);

        let others = self.x.remove_column(index);
        let regressor = Matrix::column_vector(&self.x.column(index));
        let y_residuals = LeastSquares::fit(&others, &self.y)?.residuals().clone();
        let x_residuals = LeastSquares::fit(&others, &regressor)?.residuals().clone();
        Ok(PartialRegression::new(index, y_residuals, x_residuals))
    }
}
