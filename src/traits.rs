use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types. Structural operations
/// (transpose, `+`, `-`, `*`, gramian, cofactor determinant) only need this.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that divides, pivots or takes square roots:
/// LU decomposition, solves, inverses, special functions, distributions
/// and regression.
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` constant into `Self`.
    ///
    /// Lossless for `f64`, rounded for `f32`; never fails for real floats.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap()
    }

    /// Convert a count (rows, degrees of freedom, ...) into `Self`.
    #[inline]
    fn count(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap()
    }
}

impl<T: Scalar + Float> FloatScalar for T {}
