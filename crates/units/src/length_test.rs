mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, GPC_TO_MPC, MPC_TO_KM};

    #[test]
    fn test_length_conversions() {
        // Test Mpc to km conversion
        let length_mpc = Length::from_mpc(1.0);
        assert_relative_eq!(length_mpc.to_km(), MPC_TO_KM);

        // Test Gpc to Mpc conversion
        let length_gpc = Length::from_gpc(1.0);
        assert_relative_eq!(length_gpc.to_mpc(), GPC_TO_MPC);

        // Test round trip
        let original = 8825.5;
        let length = Length::from_mpc(original);
        let gpc_value = length.to_gpc();
        let round_trip = Length::from_gpc(gpc_value).to_mpc();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let length1 = Length::from_mpc(5.0);
        let length2 = Length::from_mpc(3.0);

        // Test addition and subtraction
        assert_relative_eq!((length1 + length2).to_mpc(), 8.0);
        assert_relative_eq!((length1 - length2).to_mpc(), 2.0);

        // Test multiplication with f64
        let scaled = length1 * 2.0;
        assert_relative_eq!(scaled.to_mpc(), 10.0);

        // Test division with f64
        let divided = length1 / 2.0;
        assert_relative_eq!(divided.to_mpc(), 2.5);

        // Test commutative multiplication
        let commutative = 1.5 * length1;
        assert_relative_eq!(commutative.to_mpc(), 7.5);

        // Test dimensionless ratio
        assert_relative_eq!(length1 / length2, 5.0 / 3.0);
    }

    #[test]
    fn test_length_min_max() {
        let length1 = Length::from_mpc(5.0);
        let length2 = Length::from_mpc(3.0);
        let length3 = Length::from_mpc(7.0);

        assert_relative_eq!(length1.min(length2).to_mpc(), 3.0);
        assert_relative_eq!(length2.min(length1).to_mpc(), 3.0);
        assert_relative_eq!(length1.max(length2).to_mpc(), 5.0);
        assert_relative_eq!(length1.max(length3).to_mpc(), 7.0);
    }

    #[test]
    fn test_length_zero_and_powi() {
        assert_eq!(Length::zero().to_mpc(), 0.0);

        let side = Length::from_mpc(100.0);
        assert_relative_eq!(side.powi(3), 1.0e6);
    }
}
