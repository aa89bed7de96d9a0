mod tests {
    use approx::assert_relative_eq;

    use crate::solid_angle::ARCMIN2_PER_STERADIAN;
    use crate::volume_density::VolumeDensity;

    #[test]
    fn test_volume_density_conversions() {
        let element = VolumeDensity::from_mpc3_per_sr(2.7e10);
        assert_relative_eq!(element.to_mpc3_per_sr(), 2.7e10);

        // Per-arcmin² value is smaller by the steradian-to-arcmin² factor
        assert_relative_eq!(
            element.to_mpc3_per_arcmin2(),
            2.7e10 / ARCMIN2_PER_STERADIAN
        );
    }

    #[test]
    fn test_volume_density_arithmetic_operations() {
        let element1 = VolumeDensity::from_mpc3_per_sr(2.0e10);
        let element2 = VolumeDensity::from_mpc3_per_sr(5.0e9);

        assert_relative_eq!((element1 + element2).to_mpc3_per_sr(), 2.5e10);
        assert_relative_eq!((element1 - element2).to_mpc3_per_sr(), 1.5e10);
        assert_relative_eq!((element1 * 0.5).to_mpc3_per_sr(), 1.0e10);
        assert_relative_eq!((element1 / 2.0).to_mpc3_per_sr(), 1.0e10);
        assert_relative_eq!((2.0 * element2).to_mpc3_per_sr(), 1.0e10);
    }
}
