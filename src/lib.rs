//! # olsmat
//!
//! Dense matrices, LU-based linear solves, and ordinary least squares
//! regression with full inferential diagnostics. no-std compatible
//! (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use olsmat::{Matrix, Regression};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(&[
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Matrix::column_vector(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[(1, 0)] - 3.0).abs() < 1e-12);
//!
//! // Fit weight = β₀ + β₁·height
//! let heights = [1.47, 1.55, 1.63, 1.70, 1.78];
//! let design = Matrix::from_fn(5, 2, |i, j| if j == 0 { 1.0 } else { heights[i] });
//! let weights = Matrix::column_vector(&[52.21, 55.84, 59.93, 64.47, 69.92]);
//! let fit = Regression::new(design, weights).unwrap();
//! assert!(fit.r_squared() > 0.98);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Heap-allocated `Matrix<T>` with runtime dimensions,
//!   `Vec<T>` row-major storage. Construction, indexing, transpose,
//!   checked arithmetic (`+`, `-`, `*` return `Result`), scalar
//!   multiplication, gramian `AᵀA`, and a cofactor determinant that works
//!   for integer elements.
//!
//! - [`linalg`]: LU decomposition with partial pivoting (`P·A = L·U`),
//!   forward/backward substitution, `solve`, `inverse` and `det`. Also
//!   available as methods: `a.lu()`, `a.solve(&b)`, `a.inverse()`, `a.det()`.
//!
//! - [`special`]: Γ(n/2) on the half-integer lattice, beta and incomplete
//!   beta functions, and the trapezoid-rule integrator behind them.
//!
//! - [`stats`]: F and Student's t distributions: densities and the tail
//!   probabilities used as p-values.
//!
//! - [`regression`]: [`LeastSquares`] fits and [`Regression`] models with
//!   R², adjusted R², standard errors, t tests and the F test; partial
//!   (added-variable) regressions.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by everything
//!     that divides or takes roots
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: row
//! exchanges at `trace`, fitted model sizes at `debug`, and negligible LU
//! pivots at `warn`. No logger is installed by this crate.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod regression;
pub mod special;
pub mod stats;
pub mod traits;

pub use linalg::LuDecomposition;
pub use matrix::{Matrix, MatrixError};
pub use regression::{
    LeastSquares, PartialRegression, Regression, RegressionError, RegressionOptions,
    TTestDegreesOfFreedom,
};
pub use traits::{FloatScalar, Scalar};
