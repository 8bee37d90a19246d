//! Test distributions for regression inference.
//!
//! Both distributions route their tail probabilities through the same
//! numerical core, the [regularized incomplete beta
//! function](crate::special::regularized_incomplete_beta).
//!
//! | Distribution | Parameters | `cumulative_probability(x)` |
//! |---|---|---|
//! | [`FDistribution`] | numerator df n, denominator df m | P(F > x), upper tail |
//! | [`StudentT`] | df ν | P(\|T\| > \|x\|), two-tailed |
//!
//! # Example
//!
//! ```
//! use olsmat::stats::{ContinuousDistribution, FDistribution, StudentT};
//!
//! let f = FDistribution::new(4, 31).unwrap();
//! assert!((f.cumulative_probability(1.0_f64) - 0.42243).abs() < 1e-4);
//!
//! let t = StudentT::new(22).unwrap();
//! assert!((t.cumulative_probability(2.14_f64) - 0.0437).abs() < 1e-3);
//! ```

mod f_dist;
mod student_t;


pub use f_dist::FDistribution;
pub use student_t::StudentT;

use thiserror::Error;

/// Errors from distribution construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A parameter is out of its valid range (zero degrees of freedom).
    #[error("distribution parameter out of valid range")]
    InvalidParameter,
}

/// Densities and test probabilities of a continuous distribution.
pub trait ContinuousDistribution<T> {
    /// Probability density at `x`.
    fn probability(&self, x: T) -> T;
    /// Tail probability of the statistic `x`, the p-value of a test.
    /// Which tail is documented by each distribution.
    fn cumulative_probability(&self, x: T) -> T;
}
