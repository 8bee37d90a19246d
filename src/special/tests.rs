#[cfg(test)]
mod tests {
    use super::super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    // =====================================================================
    // factorial / one_half_gamma
    // =====================================================================

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial::<f64>(0), 1.0);
        assert_eq!(factorial::<f64>(1), 1.0);
        assert_eq!(factorial::<f64>(5), 120.0);
        assert_eq!(factorial::<f64>(20), 2_432_902_008_176_640_000.0);
    }

    #[test]
    fn factorial_large_argument_does_not_recurse() {
        assert!(factorial::<f64>(170).is_finite());
        assert!(factorial::<f64>(171).is_infinite());
        assert!(factorial::<f64>(100_000).is_infinite());
    }

    #[test]
    fn one_half_gamma_even_is_factorial() {
        // Γ(n/2) = (n/2 − 1)!
        assert_eq!(one_half_gamma::<f64>(2), 1.0);
        assert_eq!(one_half_gamma::<f64>(4), 1.0);
        assert_eq!(one_half_gamma::<f64>(10), 24.0);
        assert_eq!(one_half_gamma::<f64>(24), 39_916_800.0);
    }

    #[test]
    fn one_half_gamma_odd() {
        let sqrt_pi = core::f64::consts::PI.sqrt();
        assert_eq!(one_half_gamma::<f64>(1), sqrt_pi);
        // Γ(3/2) = √π/2
        approx_eq(one_half_gamma(3), sqrt_pi / 2.0, 1e-15);
        // Γ(7/2) = 15√π/8
        approx_eq(one_half_gamma(7), 15.0 * sqrt_pi / 8.0, 1e-14);
    }

    #[test]
    fn one_half_gamma_pole() {
        assert!(one_half_gamma::<f64>(0).is_infinite());
        assert!(ln_one_half_gamma::<f64>(0).is_infinite());
    }

    #[test]
    fn ln_one_half_gamma_matches_direct() {
        for n in 1..60 {
            let direct: f64 = one_half_gamma(n);
            let log: f64 = ln_one_half_gamma(n);
            approx_eq(log, direct.ln(), 1e-10 * direct.ln().abs().max(1.0));
        }
    }

    #[test]
    fn one_half_gamma_f32() {
        let v: f32 = one_half_gamma(5);
        assert!((v - 1.329_340_4).abs() < 1e-5);
    }

    // =====================================================================
    // half_integer_beta
    // =====================================================================

    #[test]
    fn half_integer_beta_values() {
        // B(2, 3) = 1/12
        approx_eq(half_integer_beta(4, 6), 1.0 / 12.0, 1e-15);
        // B(1/2, 1/2) = π
        approx_eq(half_integer_beta(1, 1), core::f64::consts::PI, 1e-14);
        // symmetric
        approx_eq(half_integer_beta(5, 11), half_integer_beta(11, 5), 1e-15);
    }

    #[test]
    fn half_integer_beta_large_df_finite() {
        let v: f64 = half_integer_beta(400, 1);
        assert!(v.is_finite() && v > 0.0);
        // B(a, 1/2) ~ √(π/a) for large a
        approx_eq(v, (core::f64::consts::PI / 200.0).sqrt(), 1e-3);
        approx_eq(ln_half_integer_beta(400, 1), v.ln(), 1e-12);
    }

    // =====================================================================
    // trapezoid / integrate
    // =====================================================================

    #[test]
    fn trapezoid_shapes() {
        assert_eq!(trapezoid(2.0_f64, 2.0, 1.0), 2.0);
        assert_eq!(trapezoid(2.0_f64, 1.0, 1.0), 1.5);
        assert_eq!(trapezoid(1.0_f64, 2.0, 1.0), 1.5);
        assert_eq!(trapezoid(1.0_f64, 3.0, 0.5), 1.0);
    }

    #[test]
    fn integrate_constant() {
        approx_eq(integrate(|_: f64| 1.0, 0.0, 1.0, 10_000), 1.0, 1e-10);
    }

    #[test]
    fn integrate_linear_is_exact() {
        // ∫₀² (3x + 1) dx = 8
        approx_eq(integrate(|x: f64| 3.0 * x + 1.0, 0.0, 2.0, 1000), 8.0, 1e-10);
    }

    #[test]
    fn integrate_quadratic() {
        approx_eq(integrate(|x: f64| x * x, 0.0, 3.0, 10_000), 9.0, 1e-6);
    }

    #[test]
    fn integrate_reversed_limits() {
        approx_eq(integrate(|x: f64| 2.0 * x, 1.0, 0.0, 100), -1.0, 1e-12);
    }

    #[test]
    fn integrate_degenerate() {
        assert_eq!(integrate(|x: f64| x.exp(), 0.0, 1.0, 0), 0.0);
        assert_eq!(integrate(|x: f64| x.exp(), 2.0, 2.0, 10), 0.0);
    }

    // =====================================================================
    // incomplete beta
    // =====================================================================

    #[test]
    fn incomplete_beta_outside_unit_interval() {
        assert_eq!(incomplete_beta(0.0_f64, 2.0, 3.0), 0.0);
        assert_eq!(incomplete_beta(-0.5_f64, 2.0, 3.0), 0.0);
        assert_eq!(
            incomplete_beta(1.5_f64, 2.0, 3.0),
            incomplete_beta(1.0_f64, 2.0, 3.0)
        );
        // B(1; 2, 3) = B(2, 3) = 1/12
        approx_eq(incomplete_beta(1.0, 2.0, 3.0), 1.0 / 12.0, 1e-7);
    }

    #[test]
    fn incomplete_beta_closed_form() {
        // B(z; 1, 11) = (1 − (1 − z)^11) / 11
        approx_eq(incomplete_beta(0.981_138_545_953_360_8, 1.0, 11.0), 1.0 / 11.0, 1e-6);
        let z: f64 = 0.4;
        let expected = (1.0 - (1.0 - z).powi(11)) / 11.0;
        approx_eq(incomplete_beta(z, 1.0, 11.0), expected, 1e-7);
    }

    #[test]
    fn incomplete_beta_singular_at_zero() {
        // ∫₀^¼ u^{−1/2} du = 1
        approx_eq(incomplete_beta(0.25, 0.5, 1.0), 1.0, 1e-12);
    }

    #[test]
    fn incomplete_beta_singular_at_one() {
        // ∫₀^¾ (1 − u)^{−1/2} du = 2(1 − ½) = 1
        approx_eq(incomplete_beta(0.75, 1.0, 0.5), 1.0, 1e-7);
        // Full integral B(1/2, 1/2) = π stays finite
        approx_eq(incomplete_beta(1.0, 0.5, 0.5), core::f64::consts::PI, 1e-6);
    }

    #[test]
    fn incomplete_beta_custom_resolution() {
        let coarse = IntegrationSettings { resolution: 50 };
        let fine = IntegrationSettings::default();
        assert_eq!(fine.resolution, 10_000);
        // B(2, 2) = 1/6
        let c: f64 = incomplete_beta_with(1.0, 2.0, 2.0, &coarse);
        let f: f64 = incomplete_beta_with(1.0, 2.0, 2.0, &fine);
        assert!((f - 1.0 / 6.0).abs() < (c - 1.0 / 6.0).abs());
        approx_eq(c, 1.0 / 6.0, 1e-3);
    }

    #[test]
    fn regularized_bounds() {
        assert_eq!(regularized_incomplete_beta(0.0_f64, 3, 5), 0.0);
        assert_eq!(regularized_incomplete_beta(1.0_f64, 3, 5), 1.0);
        assert_eq!(regularized_incomplete_beta(2.0_f64, 3, 5), 1.0);
    }

    #[test]
    fn regularized_uniform_and_symmetry() {
        // I_z(1, 1) = z
        approx_eq(regularized_incomplete_beta(0.3, 2, 2), 0.3, 1e-8);
        // I_z(a, b) = 1 − I_{1−z}(b, a)
        let p: f64 = regularized_incomplete_beta(0.35, 5, 9);
        let q: f64 = regularized_incomplete_beta(0.65, 9, 5);
        approx_eq(p + q, 1.0, 1e-6);
    }

    #[test]
    fn regularized_with_half_shape() {
        // I_z(1/2, 1/2) = (2/π)·asin(√z)
        let z = 0.8_f64;
        let expected = 2.0 / core::f64::consts::PI * z.sqrt().asin();
        approx_eq(regularized_incomplete_beta(z, 1, 1), expected, 1e-5);
    }
}
