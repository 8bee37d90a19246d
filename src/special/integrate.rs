//! Composite trapezoid-rule quadrature.

use crate::FloatScalar;

/// Settings for [`integrate`]-based routines.
///
/// # Example
///
/// ```
/// use olsmat::special::{incomplete_beta_with, IntegrationSettings};
///
/// let coarse = IntegrationSettings { resolution: 500 };
/// let v: f64 = incomplete_beta_with(0.5, 2.0, 2.0, &coarse);
/// // B(1/2; 2, 2) = 1/12
/// assert!((v - 1.0 / 12.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationSettings {
    /// Number of equal sub-intervals.
    pub resolution: usize,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self { resolution: 10_000 }
    }
}

/// Area of one trapezoid with parallel sides `a`, `b` and the given width.
///
/// Written as the rectangle under `min(a, b)` plus the triangle above it,
/// which is the same for rising and falling sides.
///
/// ```
/// use olsmat::special::trapezoid;
///
/// assert_eq!(trapezoid(2.0_f64, 2.0, 1.0), 2.0);
/// assert_eq!(trapezoid(2.0_f64, 1.0, 1.0), 1.5);
/// assert_eq!(trapezoid(1.0_f64, 2.0, 1.0), 1.5);
/// ```
#[inline]
pub fn trapezoid<T: FloatScalar>(a: T, b: T, width: T) -> T {
    let low = a.min(b);
    let high = a.max(b);
    width * low + width * (high - low) / T::lit(2.0)
}

/// ∫ f over `[from, to]` with `resolution` equal trapezoids.
///
/// A zero resolution integrates to zero. `to < from` gives the negated
/// integral.
///
/// ```
/// use olsmat::special::integrate;
///
/// assert!((integrate(|_| 1.0_f64, 0.0, 1.0, 10_000) - 1.0).abs() < 1e-10);
///
/// let area = integrate(|x: f64| x * x, 0.0, 3.0, 10_000);
/// assert!((area - 9.0).abs() < 1e-6);
/// ```
pub fn integrate<T, F>(f: F, from: T, to: T, resolution: usize) -> T
where
    T: FloatScalar,
    F: Fn(T) -> T,
{
    if resolution == 0 {
        return T::zero();
    }
    let width = (to - from) / T::count(resolution);
    let mut sum = T::zero();
    let mut left = f(from);
    for k in 1..=resolution {
        // Endpoints from the index, not by accumulating `width`.
        let x = if k == resolution { to } else { from + width * T::count(k) };
        let right = f(x);
        sum = sum + trapezoid(left, right, width);
        left = right;
    }
    sum
}
