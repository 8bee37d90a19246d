use alloc::vec::Vec;

use log::{trace, warn};

use crate::matrix::{Matrix, MatrixError};
use crate::traits::FloatScalar;

use super::solve::{backward_solve, forward_solve};

/// Sum of `lower[row][q] * upper[q][col]` over the already-factored prefix `q < k`.
#[inline]
fn prefix_dot<T: FloatScalar>(
    lower: &Matrix<T>,
    upper: &Matrix<T>,
    row: usize,
    col: usize,
    k: usize,
) -> T {
    let mut s = T::zero();
    for q in 0..k {
        s = s + lower[(row, q)] * upper[(q, col)];
    }
    s
}

/// LU decomposition with partial pivoting: `P·A = L·U`.
///
/// `L` is unit lower-triangular, `U` upper-triangular and `P` the row
/// permutation that was applied while pivoting. Computed once from a square
/// matrix and never mutated afterwards.
///
/// Singular input is not an error here. A pivot whose magnitude is at most
/// `n · ε` times the largest entry of its own row of `A` (or that is not
/// finite) is recorded as negligible; an exactly-zero pivot leaves
/// its column of `L` at zero, so `L` and `U` stay finite and
/// [`det`](LuDecomposition::det) returns zero. [`solve`](LuDecomposition::solve)
/// and [`inverse`](LuDecomposition::inverse) refuse to run on such a
/// factorization and return [`MatrixError::Singular`].
///
/// # Example
///
/// ```
/// use olsmat::{LuDecomposition, Matrix};
///
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [5.0, 3.0]]);
/// let lu = LuDecomposition::new(&a).unwrap();
///
/// let b = Matrix::column_vector(&[4.0, 11.0]);
/// let x = lu.solve(&b).unwrap();
/// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T> {
    lower: Matrix<T>,
    upper: Matrix<T>,
    permutation: Matrix<T>,
    row_order: Vec<usize>,
    exchanges: usize,
    singular_pivot: Option<usize>,
}

impl<T: FloatScalar> LuDecomposition<T> {
    /// Factor a square matrix (Doolittle elimination with partial pivoting).
    ///
    /// For each pivot column `i`, the candidate rows `i..n` are reduced by
    /// the rows of `U` computed so far and the row with the largest
    /// magnitude wins; ties go to the lowest row index. Fails only if `a`
    /// is not square.
    pub fn new(a: &Matrix<T>) -> Result<Self, MatrixError> {
        a.require_square()?;
        let n = a.nrows();

        let mut work = a.clone();
        let mut lower = Matrix::zeros(n, n);
        let mut upper = Matrix::zeros(n, n);
        let mut row_order: Vec<usize> = (0..n).collect();
        let mut exchanges = 0;
        let mut singular_pivot = None;

        // Negligible-pivot threshold for each original row
        let tol: Vec<T> = a
            .rows()
            .map(|row| {
                let scale = row.iter().fold(T::zero(), |m, x| m.max(x.abs()));
                T::count(n) * T::epsilon() * scale
            })
            .collect();

        for i in 0..n {
            // Partial pivoting on the partially reduced column
            let mut pivot_row = i;
            let mut max_val = (work[(i, i)] - prefix_dot(&lower, &upper, i, i, i)).abs();
            for r in (i + 1)..n {
                let val = (work[(r, i)] - prefix_dot(&lower, &upper, r, i, i)).abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = r;
                }
            }

            if pivot_row != i {
                trace!("lu: column {} exchanges rows {} and {}", i, i, pivot_row);
                work.swap_rows(i, pivot_row);
                // Columns >= i of `lower` are still zero, so swapping whole rows
                // only moves the multipliers already computed.
                lower.swap_rows(i, pivot_row);
                row_order.swap(i, pivot_row);
                exchanges += 1;
            }

            // Row i of U
            for j in i..n {
                upper[(i, j)] = work[(i, j)] - prefix_dot(&lower, &upper, i, j, i);
            }

            // Column i of L
            lower[(i, i)] = T::one();
            let pivot = upper[(i, i)];
            let negligible = !pivot.is_finite() || pivot.abs() <= tol[row_order[i]];
            if negligible && singular_pivot.is_none() {
                warn!("lu: negligible pivot {:?} at row {}", pivot, i);
                singular_pivot = Some(i);
            }
            for j in (i + 1)..n {
                let num = work[(j, i)] - prefix_dot(&lower, &upper, j, i, i);
                lower[(j, i)] = if pivot == T::zero() { T::zero() } else { num / pivot };
            }
        }

        let mut permutation = Matrix::zeros(n, n);
        for (i, &src) in row_order.iter().enumerate() {
            permutation[(i, src)] = T::one();
        }

        Ok(Self {
            lower,
            upper,
            permutation,
            row_order,
            exchanges,
            singular_pivot,
        })
    }

    /// Unit lower-triangular factor `L`.
    #[inline]
    pub fn lower(&self) -> &Matrix<T> {
        &self.lower
    }

    /// Upper-triangular factor `U`.
    #[inline]
    pub fn upper(&self) -> &Matrix<T> {
        &self.upper
    }

    /// Permutation matrix `P` with `P·A = L·U`.
    #[inline]
    pub fn permutation(&self) -> &Matrix<T> {
        &self.permutation
    }

    /// Row `i` of `P·A` is row `row_order()[i]` of `A`.
    #[inline]
    pub fn row_order(&self) -> &[usize] {
        &self.row_order
    }

    /// Number of row exchanges performed while pivoting.
    #[inline]
    pub fn exchange_count(&self) -> usize {
        self.exchanges
    }

    /// Whether a negligible pivot was found.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.singular_pivot.is_some()
    }

    /// Row of the first negligible pivot, if any.
    #[inline]
    pub fn singular_pivot(&self) -> Option<usize> {
        self.singular_pivot
    }

    /// Dimension of the factored matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.upper.nrows()
    }

    /// Determinant: product of `U`'s diagonal, negated for an odd number of
    /// row exchanges. The empty matrix has determinant zero.
    pub fn det(&self) -> T {
        let n = self.dim();
        if n == 0 {
            return T::zero();
        }
        let mut d = if self.exchanges % 2 == 0 { T::one() } else { -T::one() };
        for i in 0..n {
            d = d * self.upper[(i, i)];
        }
        d
    }

    /// `P·b`, reordering the rows of `b`.
    fn permute(&self, b: &Matrix<T>) -> Matrix<T> {
        Matrix::from_fn(b.nrows(), b.ncols(), |i, j| b[(self.row_order[i], j)])
    }

    fn require_nonsingular(&self) -> Result<(), MatrixError> {
        match self.singular_pivot {
            Some(pivot) => Err(MatrixError::Singular { pivot }),
            None => Ok(()),
        }
    }

    /// Solve `A·x = b` for `x`: forward substitution on `L·y = P·b`,
    /// then backward substitution on `U·x = y`.
    ///
    /// `b` may hold several right-hand sides as columns.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if b.nrows() != self.dim() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.dim(), b.ncols()),
                got: b.shape(),
            });
        }
        self.require_nonsingular()?;
        let y = forward_solve(&self.lower, &self.permute(b))?;
        backward_solve(&self.upper, &y)
    }

    /// Matrix inverse, solving against one column of the identity at a time.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        self.require_nonsingular()?;
        let n = self.dim();
        let mut inv = Matrix::zeros(n, n);
        let mut e = Matrix::zeros(n, 1);
        for col in 0..n {
            if col > 0 {
                e[(col - 1, 0)] = T::zero();
            }
            e[(col, 0)] = T::one();

            let x = self.solve(&e)?;
            for row in 0..n {
                inv[(row, col)] = x[(row, 0)];
            }
        }
        Ok(inv)
    }
}
