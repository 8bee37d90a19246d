use crate::FloatScalar;
use crate::special::{ln_half_integer_beta, regularized_incomplete_beta_with, IntegrationSettings};
use super::{ContinuousDistribution, StatsError};

/// Fisher–Snedecor F-distribution with `n` numerator and `m` denominator
/// degrees of freedom.
///
/// [`cumulative_probability`](ContinuousDistribution::cumulative_probability)
/// is the upper tail `P(F > x) = 1 − I_z(n/2, m/2)` with `z = n·x / (m + n·x)`,
/// i.e. the p-value of an F test. Values that round below zero are clamped
/// to exactly zero.
///
/// # Example
///
/// ```
/// use olsmat::stats::{ContinuousDistribution, FDistribution};
///
/// let f = FDistribution::new(2, 22).unwrap();
/// let p: f64 = f.cumulative_probability(572.2);
/// assert!(p >= 0.0 && p < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FDistribution {
    n: u32,
    m: u32,
    integration: IntegrationSettings,
}

impl FDistribution {
    /// Create an F(n, m) distribution. Both degrees of freedom must be positive.
    pub fn new(n: u32, m: u32) -> Result<Self, StatsError> {
        if n == 0 || m == 0 {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self {
            n,
            m,
            integration: IntegrationSettings::default(),
        })
    }

    /// Use `settings` for the incomplete beta quadrature.
    pub fn with_integration(mut self, settings: IntegrationSettings) -> Self {
        self.integration = settings;
        self
    }

    /// Numerator degrees of freedom.
    pub fn numerator_df(&self) -> u32 {
        self.n
    }

    /// Denominator degrees of freedom.
    pub fn denominator_df(&self) -> u32 {
        self.m
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for FDistribution {
    fn probability(&self, x: T) -> T {
        let zero = T::zero();
        if x < zero {
            return zero;
        }
        if x == zero {
            return match self.n {
                1 => T::infinity(),
                2 => T::one(),
                _ => zero,
            };
        }
        let half = T::lit(0.5);
        let n = T::count(self.n as usize);
        let m = T::count(self.m as usize);
        let nx = n * x;
        let ln_pdf = half * (n * nx.ln() + m * m.ln() - (n + m) * (nx + m).ln())
            - x.ln()
            - ln_half_integer_beta::<T>(self.n, self.m);
        ln_pdf.exp()
    }

    fn cumulative_probability(&self, x: T) -> T {
        if x == T::infinity() {
            return T::zero();
        }
        let n = T::count(self.n as usize);
        let m = T::count(self.m as usize);
        let nx = n * x;
        let z = (nx / (m + nx)).max(T::zero());
        let ib = regularized_incomplete_beta_with(z, self.n, self.m, &self.integration);
        (T::one() - ib).max(T::zero())
    }
}
