mod tests {
    use approx::assert_relative_eq;

    use crate::catalog::{simulations, surveys, SimulationKind};
    use crate::parameters::CosmologyParameters;

    #[test]
    fn test_catalog_completeness() {
        let sims = simulations();
        assert_eq!(sims.len(), 26);

        // Every category is represented
        for kind in [
            SimulationKind::LargeVolume,
            SimulationKind::RadiativeTransfer,
            SimulationKind::Zoom,
        ] {
            assert!(sims.iter().any(|sim| sim.kind == kind));
        }

        // Radiative-transfer runs all stop during or after reionization
        for sim in sims.iter().filter(|sim| sim.radiative_transfer) {
            assert!(sim.redshift_end > 4.0, "{} ends too late", sim.name);
        }

        assert_eq!(surveys().len(), 5);
    }

    #[test]
    fn test_eagle_ref_derived_quantities() {
        let sims = simulations();
        let eagle = sims.iter().find(|sim| sim.name == "EAGLE-Ref").unwrap();

        // (100 cMpc)³
        assert_relative_eq!(eagle.comoving_volume().to_cubic_mpc(), 1.0e6);

        // log10(1.81e6 × 100)
        assert_relative_eq!(
            eagle.min_stellar_mass_log10().unwrap(),
            8.2577,
            epsilon = 1e-4
        );

        // 432 arcmin² as a Δz = 1 slice at z = 7
        let params = CosmologyParameters::planck2015();
        let area = eagle.sky_area(7.0, 1.0, &params).unwrap();
        assert_relative_eq!(area.to_square_arcmin(), 432.0945, epsilon = 1e-3);
    }

    #[test]
    fn test_survey_volumes_ordered_by_footprint() {
        let params = CosmologyParameters::planck2015();
        let surveys = surveys();

        // All footprints target z = 7 here, so volume ordering follows area
        // ordering: NGDEEP < COSMOS-Web < Euclid Deep < Euclid Wide < sky
        let volumes: Vec<f64> = surveys
            .iter()
            .map(|survey| {
                survey
                    .comoving_volume(1.0, &params)
                    .unwrap()
                    .to_cubic_mpc()
            })
            .collect();

        let mut sorted = volumes.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(volumes, sorted, "catalog should be ordered largest first");

        // The whole sky in a Δz = 1 slice at z = 7 holds ~3.4e11 cMpc³
        assert_relative_eq!(volumes[0], 3.43699470694e11, max_relative = 1e-6);
    }

    #[test]
    fn test_display_of_simulation_kind() {
        assert_eq!(SimulationKind::LargeVolume.to_string(), "large-volume");
        assert_eq!(
            SimulationKind::RadiativeTransfer.to_string(),
            "radiative-transfer"
        );
        assert_eq!(SimulationKind::Zoom.to_string(), "zoom");
    }
}
