//! Linear systems over floating-point matrices.
//!
//! Everything here is built on one factorization, [`LuDecomposition`]
//! (`P·A = L·U` with partial pivoting). Solves, inverses and determinants
//! are available both as free functions and as methods on [`Matrix`]:
//!
//! ```
//! use olsmat::Matrix;
//!
//! let a = Matrix::from_rows(&[[4.0_f64, 3.0], [6.0, 3.0]]);
//! let b = Matrix::column_vector(&[10.0, 12.0]);
//! let x = a.solve(&b).unwrap();
//! assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
//! ```
//!
//! Failures are reported as [`MatrixError`]: non-square input, mismatched
//! right-hand sides, or a singular matrix (`Singular { pivot }`).

pub(crate) mod lu;
pub(crate) mod solve;

pub use lu::LuDecomposition;
pub use solve::{backward_solve, determinant, forward_solve, inverse, solve};

#[doc(no_inline)]
pub use crate::matrix::{Matrix, MatrixError};
