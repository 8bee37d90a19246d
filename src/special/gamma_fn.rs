//! Factorial and the Gamma function on the half-integer lattice.

use crate::FloatScalar;

/// `ln √π`
const LN_SQRT_PI: f64 = 0.572_364_942_924_700_1;

/// Factorial `n!`, by an iterative product.
///
/// Exact in `f64` up to `22!`; overflows to infinity past `170!`.
///
/// # Example
///
/// ```
/// use olsmat::special::factorial;
///
/// assert_eq!(factorial::<f64>(0), 1.0);
/// assert_eq!(factorial::<f64>(11), 39_916_800.0);
/// ```
pub fn factorial<T: FloatScalar>(n: u32) -> T {
    let mut acc = T::one();
    let mut k = T::one();
    for _ in 1..n {
        k = k + T::one();
        acc = acc * k;
    }
    acc
}

/// Γ(n/2) for a non-negative integer `n`.
///
/// Even `n` reduces to the factorial `(n/2 − 1)!`; odd `n` uses
/// `√π · ∏_{i=1}^{(n−1)/2} (n/2 − i)`. `n = 0` is the pole at zero and
/// returns infinity.
///
/// # Example
///
/// ```
/// use olsmat::special::one_half_gamma;
///
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((one_half_gamma::<f64>(1) - sqrt_pi).abs() < 1e-15);
/// assert!((one_half_gamma::<f64>(3) - sqrt_pi / 2.0).abs() < 1e-15);
/// assert_eq!(one_half_gamma::<f64>(24), 39_916_800.0);
/// ```
pub fn one_half_gamma<T: FloatScalar>(n: u32) -> T {
    if n == 0 {
        return T::infinity();
    }
    if n % 2 == 0 {
        return factorial(n / 2 - 1);
    }
    let half_n = T::count(n as usize) / T::lit(2.0);
    let mut acc = T::lit(core::f64::consts::PI).sqrt();
    for i in 1..=(n - 1) / 2 {
        acc = acc * (half_n - T::count(i as usize));
    }
    acc
}

/// ln Γ(n/2), summed in log space so large `n` does not overflow.
///
/// ```
/// use olsmat::special::{ln_one_half_gamma, one_half_gamma};
///
/// let direct: f64 = one_half_gamma(15);
/// assert!((ln_one_half_gamma::<f64>(15) - direct.ln()).abs() < 1e-12);
/// assert!(ln_one_half_gamma::<f64>(2001).is_finite());
/// ```
pub fn ln_one_half_gamma<T: FloatScalar>(n: u32) -> T {
    if n == 0 {
        return T::infinity();
    }
    let mut acc = T::zero();
    if n % 2 == 0 {
        // ln (n/2 - 1)!
        for k in 2..(n / 2) {
            acc = acc + T::count(k as usize).ln();
        }
        return acc;
    }
    let half_n = T::count(n as usize) / T::lit(2.0);
    acc = T::lit(LN_SQRT_PI);
    for i in 1..=(n - 1) / 2 {
        acc = acc + (half_n - T::count(i as usize)).ln();
    }
    acc
}
