mod tests {
    use approx::assert_relative_eq;

    use crate::error::CosmologyError;
    use crate::expansion::expansion_factor;
    use crate::parameters::CosmologyParameters;

    #[test]
    fn test_expansion_factor_at_present_epoch() {
        let params = CosmologyParameters::planck2015();

        // E(0) = sqrt(Om0 + Ode0); with the Planck 2015 set the densities
        // sum to 1 and E(0) is unity
        let e0 = expansion_factor(0.0, &params).unwrap();
        assert_relative_eq!(e0, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_expansion_factor_reference_values() {
        let params = CosmologyParameters::planck2015();

        // E(z) = sqrt(0.3089 (1+z)³ + 0.6911)
        assert_relative_eq!(
            expansion_factor(7.0, &params).unwrap(),
            12.60348761256185,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            expansion_factor(1.0, &params).unwrap(),
            (0.3089 * 8.0 + 0.6911f64).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_expansion_factor_monotonic_in_z() {
        let params = CosmologyParameters::planck2015();

        let mut previous = expansion_factor(0.0, &params).unwrap();
        for z in [0.5, 1.0, 2.0, 5.0, 10.0] {
            let e = expansion_factor(z, &params).unwrap();
            assert!(e > previous, "E(z) must grow with z, failed at z = {}", z);
            previous = e;
        }
    }

    #[test]
    fn test_expansion_factor_stable_at_large_z() {
        let params = CosmologyParameters::planck2015();

        // Matter domination: E(z) → sqrt(Om0) (1+z)^1.5
        let e = expansion_factor(300.0, &params).unwrap();
        assert!(e.is_finite());
        assert_relative_eq!(
            e,
            (0.3089f64 * 301.0f64.powi(3) + 0.6911).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_expansion_factor_rejects_negative_redshift() {
        let params = CosmologyParameters::planck2015();

        assert_eq!(
            expansion_factor(-0.5, &params),
            Err(CosmologyError::NegativeRedshift(-0.5))
        );
    }
}
