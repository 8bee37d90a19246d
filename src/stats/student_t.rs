use crate::FloatScalar;
use crate::special::{ln_one_half_gamma, regularized_incomplete_beta_with, IntegrationSettings};
use super::{ContinuousDistribution, StatsError};

/// Student's t-distribution with ν degrees of freedom.
///
/// [`cumulative_probability`](ContinuousDistribution::cumulative_probability)
/// is two-tailed: `P(|T| > |t|) = I_{ν/(ν+t²)}(ν/2, 1/2)`, the p-value of a
/// coefficient t test.
///
/// # Example
///
/// ```
/// use olsmat::stats::{ContinuousDistribution, StudentT};
///
/// let t = StudentT::new(1).unwrap();
/// // Cauchy: P(|T| > 1) = 1/2, density at 0 is 1/π
/// assert!((t.cumulative_probability(1.0_f64) - 0.5).abs() < 1e-6);
/// assert!((t.probability(0.0_f64) - core::f64::consts::FRAC_1_PI).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    df: u32,
    integration: IntegrationSettings,
}

impl StudentT {
    /// Create a Student's t-distribution with `df` degrees of freedom. Requires `df > 0`.
    pub fn new(df: u32) -> Result<Self, StatsError> {
        if df == 0 {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self {
            df,
            integration: IntegrationSettings::default(),
        })
    }

    /// Use `settings` for the incomplete beta quadrature.
    pub fn with_integration(mut self, settings: IntegrationSettings) -> Self {
        self.integration = settings;
        self
    }

    /// Degrees of freedom.
    pub fn df(&self) -> u32 {
        self.df
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for StudentT {
    fn probability(&self, x: T) -> T {
        let one = T::one();
        let half = T::lit(0.5);
        let pi = T::lit(core::f64::consts::PI);
        let v = T::count(self.df as usize);
        let ln_pdf = ln_one_half_gamma::<T>(self.df + 1) - ln_one_half_gamma::<T>(self.df)
            - half * (v * pi).ln()
            - (v + one) * half * (one + x * x / v).ln();
        ln_pdf.exp()
    }

    fn cumulative_probability(&self, x: T) -> T {
        let v = T::count(self.df as usize);
        let z = v / (v + x * x);
        regularized_incomplete_beta_with(z, self.df, 1, &self.integration)
    }
}
