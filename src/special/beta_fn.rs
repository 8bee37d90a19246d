//! Beta function at half-integer arguments.

use crate::FloatScalar;
use super::gamma_fn::ln_one_half_gamma;

/// B(n/2, m/2) = Γ(n/2)·Γ(m/2) / Γ((n+m)/2).
///
/// Computed as `exp(ln_half_integer_beta(n, m))`, so the normalizer of an
/// F(n, m) or t(n) distribution stays finite for large degrees of freedom.
///
/// # Example
///
/// ```
/// use olsmat::special::half_integer_beta;
///
/// // B(1, 1) = 1
/// assert!((half_integer_beta::<f64>(2, 2) - 1.0).abs() < 1e-14);
/// // B(1/2, 1/2) = π
/// assert!((half_integer_beta::<f64>(1, 1) - core::f64::consts::PI).abs() < 1e-14);
/// ```
pub fn half_integer_beta<T: FloatScalar>(n: u32, m: u32) -> T {
    ln_half_integer_beta::<T>(n, m).exp()
}

/// ln B(n/2, m/2).
pub fn ln_half_integer_beta<T: FloatScalar>(n: u32, m: u32) -> T {
    ln_one_half_gamma::<T>(n) + ln_one_half_gamma::<T>(m) - ln_one_half_gamma::<T>(n + m)
}
