//! Ordinary least squares regression with inferential diagnostics.
//!
//! - [`LeastSquares`]: coefficients from the normal equations
//!   `β = (XᵀX)⁻¹·Xᵀy`, residuals, predictions and sums of squares.
//!   Accepts `n == p` (an exact fit).
//! - [`Regression`]: a least-squares fit plus R², adjusted R², standard
//!   errors, coefficient t statistics and p-values, and the model F test.
//!   Requires more observations than parameters.
//! - [`PartialRegression`]: added-variable data for one regressor.
//!
//! # Example
//!
//! ```
//! use olsmat::{Matrix, Regression};
//!
//! let x = Matrix::from_rows(&[[1.0_f64, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]]);
//! let y = Matrix::column_vector(&[2.1, 3.9, 6.2, 7.8, 10.1]);
//! let fit = Regression::new(x, y).unwrap();
//!
//! assert!((fit.beta()[(1, 0)] - 1.99).abs() < 1e-12);
//! assert!(fit.r_squared() > 0.99);
//! assert!(fit.p_values_of_coeff()[(1, 0)] < 1e-3);
//! ```

mod least_squares;
mod model;
mod partial;


pub use least_squares::LeastSquares;
pub use model::Regression;
pub use partial::PartialRegression;

use thiserror::Error;

use crate::matrix::MatrixError;
use crate::special::IntegrationSettings;
use crate::stats::StatsError;

/// Errors from fitting a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegressionError {
    /// Shape mismatch or singular `XᵀX` (collinear design).
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Distribution construction failed.
    #[error(transparent)]
    Stats(#[from] StatsError),
    /// Not enough observations to leave positive degrees of freedom.
    #[error("{observations} observations cannot fit {parameters} parameters")]
    InsufficientData { observations: usize, parameters: usize },
    /// Regressor index past the last column of the design matrix.
    #[error("column {index} out of range for a design with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },
}

/// Degrees of freedom used for coefficient t tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TTestDegreesOfFreedom {
    /// Residual degrees of freedom `n − p`.
    #[default]
    Residual,
    /// `n − 1`, ignoring the number of fitted parameters.
    Total,
}

/// Settings for [`Regression::with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegressionOptions {
    /// Degrees of freedom for coefficient p-values.
    pub t_test_df: TTestDegreesOfFreedom,
    /// Quadrature used by the t and F tail probabilities.
    pub integration: IntegrationSettings,
}
