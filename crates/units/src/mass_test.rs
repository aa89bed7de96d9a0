mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, SOLAR_MASS_G};

    #[test]
    fn test_mass_conversions() {
        // Test solar mass to grams conversion
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_grams(), SOLAR_MASS_G);

        // Test grams to solar mass conversion
        let from_grams = Mass::from_grams(SOLAR_MASS_G);
        assert_relative_eq!(from_grams.to_solar_masses(), 1.0);

        // Test kg round trip
        let gas_particle = Mass::from_solar_masses(1.81e6);
        let round_trip = Mass::from_kg(gas_particle.to_kg());
        assert_relative_eq!(round_trip.to_solar_masses(), 1.81e6);
    }

    #[test]
    fn test_mass_log10() {
        let mass = Mass::from_solar_masses(1.0e8);
        assert_relative_eq!(mass.log10(), 8.0);

        let gas_particle = Mass::from_solar_masses(1.81e6);
        assert_relative_eq!(gas_particle.log10(), 6.2577, epsilon = 1e-4);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_solar_masses(5.0);
        let mass2 = Mass::from_solar_masses(3.0);

        assert_relative_eq!((mass1 + mass2).to_solar_masses(), 8.0);
        assert_relative_eq!((mass1 - mass2).to_solar_masses(), 2.0);
        assert_relative_eq!((mass1 * 100.0).to_solar_masses(), 500.0);
        assert_relative_eq!((mass1 / 2.0).to_solar_masses(), 2.5);
        assert_relative_eq!(mass1 / mass2, 5.0 / 3.0);
        assert_relative_eq!((100.0 * mass1).to_solar_masses(), 500.0);
    }
}
