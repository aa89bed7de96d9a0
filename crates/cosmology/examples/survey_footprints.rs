//! Survey footprint comparison example
//!
//! Converts every simulation box in the catalog into the sky area it would
//! subtend as a Δz = 1 redshift slice at z = 7, alongside the reference
//! survey footprints at the same slice.
//!
//! Run with: cargo run --package cosmology --example survey_footprints

use cosmology::{
    comoving_distance, comoving_volume_element, simulations, surveys, CosmologyParameters,
};

fn main() {
    let params = CosmologyParameters::planck2015();
    let z_center = 7.0;
    let delta_z = 1.0;

    println!("Survey Footprint Comparison at z = {z_center}, Δz = {delta_z}\n");
    println!("{}", "=".repeat(72));

    println!("Cosmology: Planck 2015");
    println!("  H0  = {:.2} km/s/Mpc", params.h0());
    println!("  Om0 = {:.4}, Ode0 = {:.4}", params.om0(), params.ode0());
    println!(
        "  D_H = {:.1} Mpc, D_C({z_center}) = {:.1} Mpc",
        params.hubble_distance().to_mpc(),
        comoving_distance(z_center, &params).unwrap().to_mpc()
    );
    println!(
        "  dV/dz/dΩ({z_center}) = {:.4e} Mpc³/sr",
        comoving_volume_element(z_center, &params)
            .unwrap()
            .to_mpc3_per_sr()
    );

    println!("\nSimulation boxes:");
    println!(
        "{:<18} {:>12} {:>14} {:>12} {:>10}",
        "name", "side/cMpc", "volume/cMpc³", "area/arcmin²", "log M*min"
    );
    for sim in simulations() {
        let volume = sim.comoving_volume();
        let area = sim
            .sky_area(z_center, delta_z, &params)
            .expect("catalog volumes are positive");
        let mass_floor = sim
            .min_stellar_mass_log10()
            .expect("catalog gas masses are positive");

        println!(
            "{:<18} {:>12.1} {:>14.4e} {:>12.2} {:>10.2}",
            sim.name,
            sim.box_side.to_mpc(),
            volume.to_cubic_mpc(),
            area.to_square_arcmin(),
            mass_floor
        );
    }

    println!("\nSurvey footprints:");
    println!(
        "{:<18} {:>14} {:>16}",
        "name", "area/arcmin²", "volume/cMpc³"
    );
    for survey in surveys() {
        let volume = survey
            .comoving_volume(delta_z, &params)
            .expect("catalog areas are positive");

        println!(
            "{:<18} {:>14.2e} {:>16.4e}",
            survey.name,
            survey.area.to_square_arcmin(),
            volume.to_cubic_mpc()
        );
    }

    println!("\n{}", "=".repeat(72));
    println!("Done.");
}
