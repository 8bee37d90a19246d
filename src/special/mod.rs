//! Special mathematical functions.
//!
//! Gamma on the half-integer lattice, the beta and incomplete beta
//! functions, and the trapezoid-rule integrator they are built on.
//! All functions are generic over [`FloatScalar`](crate::FloatScalar) (f32/f64) and no-std
//! compatible.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`factorial`] | n! |
//! | [`one_half_gamma`] | Γ(n/2) for integer n |
//! | [`ln_one_half_gamma`] | ln Γ(n/2) |
//! | [`half_integer_beta`] | B(n/2, m/2) |
//! | [`trapezoid`] | Area of one trapezoid |
//! | [`integrate`] | Composite trapezoid rule |
//! | [`incomplete_beta`] | B(z; a, b) = ∫₀ᶻ u^{a−1}(1−u)^{b−1} du |
//! | [`regularized_incomplete_beta`] | I_z(n/2, m/2) = B(z; n/2, m/2) / B(n/2, m/2) |
//!
//! # Example
//!
//! ```
//! use olsmat::special::{half_integer_beta, one_half_gamma, regularized_incomplete_beta};
//!
//! // Γ(5/2) = 3√π/4
//! let sqrt_pi = core::f64::consts::PI.sqrt();
//! assert!((one_half_gamma::<f64>(5) - 0.75 * sqrt_pi).abs() < 1e-14);
//!
//! // B(a,b) = B(b,a)
//! let ab: f64 = half_integer_beta(3, 7);
//! assert!((ab - half_integer_beta::<f64>(7, 3)).abs() < 1e-14);
//!
//! // I_z(a, b) + I_{1−z}(b, a) = 1
//! let p: f64 = regularized_incomplete_beta(0.3, 4, 6);
//! let q: f64 = regularized_incomplete_beta(0.7, 6, 4);
//! assert!((p + q - 1.0).abs() < 1e-6);
//! ```

mod gamma_fn;
mod beta_fn;
mod integrate;
mod betainc;

#[cfg(test)]
mod tests;

pub use gamma_fn::{factorial, ln_one_half_gamma, one_half_gamma};
pub use beta_fn::{half_integer_beta, ln_half_integer_beta};
pub use integrate::{integrate, trapezoid, IntegrationSettings};
pub use betainc::{
    incomplete_beta, incomplete_beta_with, regularized_incomplete_beta,
    regularized_incomplete_beta_with,
};
