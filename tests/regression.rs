//! End-to-end regression tests against published results.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use olsmat::stats::{ContinuousDistribution, StudentT};
use olsmat::{LeastSquares, Matrix, MatrixError, Regression, RegressionError};

// Average mass of American women aged 30–39 by height (The World Almanac, 1975).
const HEIGHTS: [f64; 15] = [
    1.47, 1.50, 1.52, 1.55, 1.57, 1.60, 1.63, 1.65, 1.68, 1.70, 1.73, 1.75, 1.78, 1.80, 1.83,
];
const WEIGHTS: [f64; 15] = [
    52.21, 53.12, 54.48, 55.84, 57.20, 58.57, 59.93, 61.29, 63.11, 64.47, 66.28, 68.10, 69.92,
    72.19, 74.46,
];

/// Columns `[1, h, h²]`.
fn quadratic_design() -> Matrix<f64> {
    let h = Matrix::column_vector(&HEIGHTS);
    let h2 = h.combine(&h, |a, b| a * b).unwrap();
    let mut x = Matrix::from_fn(HEIGHTS.len(), 1, |_, _| 1.0);
    x.append_column(h.as_slice()).unwrap();
    x.append_column(h2.as_slice()).unwrap();
    x
}

fn quadratic_fit() -> Regression<f64> {
    Regression::new(quadratic_design(), Matrix::column_vector(&WEIGHTS)).unwrap()
}

// ============================================================================
// Known dataset
// ============================================================================

#[test]
fn test_height_weight_coefficients() {
    let fit = quadratic_fit();
    assert_abs_diff_eq!(fit.beta()[(0, 0)], 128.8128, epsilon = 1e-4);
    assert_abs_diff_eq!(fit.beta()[(1, 0)], -143.1620, epsilon = 1e-4);
    assert_abs_diff_eq!(fit.beta()[(2, 0)], 61.9603, epsilon = 1e-4);
    assert_eq!(fit.df(), 12);
}

#[test]
fn test_height_weight_goodness_of_fit() {
    let fit = quadratic_fit();
    assert_abs_diff_eq!(fit.r_squared(), 0.9989, epsilon = 1e-4);
    assert_abs_diff_eq!(fit.adj_r_squared(), 0.9987, epsilon = 1e-4);
    assert_abs_diff_eq!(fit.std_error(), 0.2516, epsilon = 1e-4);
    assert_relative_eq!(fit.tss(), fit.mss() + fit.ess(), max_relative = 1e-9);
}

#[test]
fn test_height_weight_coefficient_inference() {
    let fit = quadratic_fit();
    let se = fit.std_error_of_coeff();
    assert_abs_diff_eq!(se[(0, 0)], 16.3083, epsilon = 1e-3);
    assert_abs_diff_eq!(se[(1, 0)], 19.8332, epsilon = 1e-3);
    assert_abs_diff_eq!(se[(2, 0)], 6.0084, epsilon = 1e-3);

    let t = fit.t_values_of_coeff();
    assert_abs_diff_eq!(t[(0, 0)], 7.8986, epsilon = 1e-3);
    assert_abs_diff_eq!(t[(1, 0)], -7.2183, epsilon = 1e-3);
    assert_abs_diff_eq!(t[(2, 0)], 10.3122, epsilon = 1e-3);

    let p = fit.p_values_of_coeff();
    assert_relative_eq!(p[(0, 0)], 4.2833e-6, max_relative = 1e-3);
    assert_relative_eq!(p[(1, 0)], 1.0597e-5, max_relative = 1e-3);
    assert_relative_eq!(p[(2, 0)], 2.5665e-7, max_relative = 1e-3);
}

#[test]
fn test_height_weight_f_test() {
    let fit = quadratic_fit();
    assert_relative_eq!(fit.f_stat(), 5471.2433, max_relative = 1e-6);
    // True tail is ~1e-17, well below the quadrature's resolution.
    assert!(fit.f_probability() >= 0.0);
    assert!(fit.f_probability() < 1e-8);
}

#[test]
fn test_height_weight_partial_regressions() {
    let fit = quadratic_fit();
    for j in 0..3 {
        let partial = fit.partial_regression(j).unwrap();
        assert_relative_eq!(partial.slope(), fit.beta()[(j, 0)], max_relative = 1e-6);
    }
}

#[test]
fn test_height_weight_prediction() {
    let fit = quadratic_fit();
    let h = 1.65;
    let at = fit.predict(&Matrix::from_rows(&[[1.0, h, h * h]])).unwrap();
    let expected = fit.beta()[(0, 0)] + fit.beta()[(1, 0)] * h + fit.beta()[(2, 0)] * h * h;
    assert_relative_eq!(at[(0, 0)], expected, max_relative = 1e-12);
    assert_relative_eq!(at[(0, 0)], fit.predicted()[(7, 0)], max_relative = 1e-12);
}

// ============================================================================
// Noiseless and degenerate inputs
// ============================================================================

#[test]
fn test_noiseless_exact_system() {
    let x = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
    let y = Matrix::column_vector(&[4.0, 6.0, 8.0]);

    let fit = LeastSquares::fit(&x, &y).unwrap();
    for (j, expected) in [2.0, 3.0, 4.0].into_iter().enumerate() {
        assert_abs_diff_eq!(fit.beta()[(j, 0)], expected, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.residuals()[(j, 0)], 0.0, epsilon = 1e-12);
    }
    assert_eq!(fit.r_squared(), 1.0);

    // No degrees of freedom left for inference
    assert_eq!(
        Regression::new(x, y).unwrap_err(),
        RegressionError::InsufficientData {
            observations: 3,
            parameters: 3
        }
    );
}

#[test]
fn test_linear_with_noise_free_response() {
    // y = 2 + 3x
    let x = Matrix::from_fn(6, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
    let y = Matrix::from_fn(6, 1, |i, _| 2.0 + 3.0 * i as f64);
    let fit = Regression::new(x, y).unwrap();
    assert_relative_eq!(fit.beta()[(0, 0)], 2.0, epsilon = 1e-10);
    assert_relative_eq!(fit.beta()[(1, 0)], 3.0, epsilon = 1e-10);
    assert_relative_eq!(fit.r_squared(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_predictors_in_very_different_units() {
    // Gramian diagonal spans 0.0007 to 2.9e13
    let x = Matrix::from_fn(20, 3, |i, j| match j {
        0 => 1.0,
        1 => 0.001 * ((7 * i) % 11) as f64,
        _ => 1e5 * (i + 1) as f64,
    });
    let y = Matrix::from_fn(20, 1, |i, _| {
        1.0 + 500.0 * x[(i, 1)] + 2e-5 * x[(i, 2)] + 0.01 * (((i * 5) % 3) as f64 - 1.0)
    });
    let fit = Regression::new(x, y).unwrap();
    assert_relative_eq!(fit.beta()[(0, 0)], 1.002844595127337, max_relative = 1e-9);
    assert_relative_eq!(fit.beta()[(1, 0)], 499.1886777576282, max_relative = 1e-9);
    assert_relative_eq!(fit.beta()[(2, 0)], 2.000107703224789e-5, max_relative = 1e-9);
    assert!(fit.r_squared() > 0.99);
}

#[test]
fn test_collinear_columns_fail() {
    // Third column is identically zero
    let x = Matrix::from_fn(HEIGHTS.len(), 3, |i, j| match j {
        0 => 1.0,
        1 => HEIGHTS[i],
        _ => 0.0,
    });
    let err = Regression::new(x, Matrix::column_vector(&WEIGHTS)).unwrap_err();
    assert_eq!(err, RegressionError::Matrix(MatrixError::Singular { pivot: 2 }));
}

#[test]
fn test_p_values_follow_t_distribution() {
    let fit = quadratic_fit();
    let t = StudentT::new(12).unwrap();
    for j in 0..3 {
        let tv = fit.t_values_of_coeff()[(j, 0)];
        assert_eq!(fit.p_values_of_coeff()[(j, 0)], t.cumulative_probability(tv));
    }
}
