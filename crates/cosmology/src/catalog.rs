//! Reference tables of cosmological simulations and galaxy surveys.
//!
//! The simulation entries record the published box side, baryonic mass
//! resolution, and run status of the large hydrodynamical simulations; the
//! survey entries record the sky footprints they are compared against.
//! Derived quantities (box volume, resolved stellar-mass floor, equivalent
//! sky area in a redshift slice) are computed on demand from the tables.

use std::fmt;

use serde::Serialize;
use units::{Length, Mass, SolidAngle, Volume};

use crate::error::CosmologyError;
use crate::parameters::CosmologyParameters;
use crate::resolution::min_resolved_stellar_mass_log10;
use crate::survey::{area_to_volume, volume_to_area};

/// Broad category of a simulation campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimulationKind {
    /// Uniform large-volume boxes run to low redshift
    LargeVolume,
    /// Boxes with on-the-fly radiative transfer, typically stopped during
    /// reionization
    RadiativeTransfer,
    /// Zoom or resimulation campaigns
    Zoom,
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SimulationKind::LargeVolume => "large-volume",
            SimulationKind::RadiativeTransfer => "radiative-transfer",
            SimulationKind::Zoom => "zoom",
        };
        write!(f, "{}", str)
    }
}

/// A published cosmological simulation box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationBox {
    /// Campaign name, e.g. "EAGLE-Ref"
    pub name: &'static str,
    /// Comoving box side length
    pub box_side: Length,
    /// Initial gas-particle (or gas-cell target) mass
    pub gas_particle_mass: Mass,
    /// Whether the run includes on-the-fly radiative transfer
    pub radiative_transfer: bool,
    /// Whether the run has finished
    pub complete: bool,
    /// Redshift the run stops at (0 for runs reaching the present day)
    pub redshift_end: f64,
    /// Campaign category
    pub kind: SimulationKind,
}

impl SimulationBox {
    /// The comoving volume of the box, side³.
    pub fn comoving_volume(&self) -> Volume {
        Volume::from_box_side(self.box_side)
    }

    /// log10 of the minimum stellar mass the box resolves, in M☉.
    pub fn min_stellar_mass_log10(&self) -> Result<f64, CosmologyError> {
        min_resolved_stellar_mass_log10(self.gas_particle_mass)
    }

    /// The sky area this box's volume would subtend if observed as a
    /// redshift slice of width `delta_z` centered on `z_center`.
    pub fn sky_area(
        &self,
        z_center: f64,
        delta_z: f64,
        params: &CosmologyParameters,
    ) -> Result<SolidAngle, CosmologyError> {
        volume_to_area(self.comoving_volume(), z_center, delta_z, params)
    }
}

/// A galaxy survey footprint used as a comparison yardstick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Survey {
    /// Survey name, e.g. "Euclid/Deep"
    pub name: &'static str,
    /// Sky footprint
    pub area: SolidAngle,
    /// Representative target redshift
    pub redshift: f64,
}

impl Survey {
    /// The comoving volume the footprint encloses in a slice of width
    /// `delta_z` centered on the survey's target redshift.
    pub fn comoving_volume(
        &self,
        delta_z: f64,
        params: &CosmologyParameters,
    ) -> Result<Volume, CosmologyError> {
        area_to_volume(self.area, self.redshift, delta_z, params)
    }
}

/// Simba boxes are quoted in cMpc/h with h = 0.7
const SIMBA_H: f64 = 0.7;

/// The catalog of simulation boxes.
pub fn simulations() -> Vec<SimulationBox> {
    fn entry(
        name: &'static str,
        side_cmpc: f64,
        gas_mass: f64,
        radiative_transfer: bool,
        complete: bool,
        redshift_end: f64,
        kind: SimulationKind,
    ) -> SimulationBox {
        SimulationBox {
            name,
            box_side: Length::from_mpc(side_cmpc),
            gas_particle_mass: Mass::from_solar_masses(gas_mass),
            radiative_transfer,
            complete,
            redshift_end,
            kind,
        }
    }

    use SimulationKind::{LargeVolume, RadiativeTransfer, Zoom};

    vec![
        entry("EAGLE-Ref", 100.0, 1.81e6, false, true, 0.0, LargeVolume),
        entry("EAGLE-Recal", 25.0, 2.26e5, false, true, 0.0, LargeVolume),
        entry("Illustris-TNG50", 51.7, 8.5e4, false, true, 0.0, LargeVolume),
        entry("Illustris-TNG100", 110.7, 1.4e6, false, true, 0.0, LargeVolume),
        entry("Illustris-TNG300", 302.6, 1.1e7, false, true, 0.0, LargeVolume),
        entry("Simba-100", 100.0 / SIMBA_H, 1.82e7, false, true, 0.0, LargeVolume),
        entry("Simba-50", 50.0 / SIMBA_H, 2.28e6, false, true, 1.0, LargeVolume),
        entry("Simba-25", 25.0 / SIMBA_H, 2.85e5, false, true, 2.0, LargeVolume),
        entry("Horizon-AGN", 120.0, 4.0e6, false, true, 0.0, LargeVolume),
        entry("BAHAMAS", 560.0, 1.5e9, false, true, 0.0, LargeVolume),
        entry("THESAN-1", 95.5, 5.82e5, true, true, 5.5, RadiativeTransfer),
        entry("THESAN-2", 95.5, 4.66e6, true, true, 5.5, RadiativeTransfer),
        entry("SPHINX", 20.0, 3.8e4, true, true, 4.6, RadiativeTransfer),
        entry("FLAMINGO-L1_m8", 1000.0, 1.34e8, false, true, 0.0, LargeVolume),
        entry("FLAMINGO-L1_m9", 1000.0, 1.07e9, false, true, 0.0, LargeVolume),
        entry("FLAMINGO-L2p8_m9", 2800.0, 1.07e9, false, true, 0.0, LargeVolume),
        entry("MTNG740", 740.0, 7.63e7, false, true, 0.0, LargeVolume),
        entry("MTNG185", 185.0, 2.98e6, false, true, 0.0, LargeVolume),
        entry("COLIBRE-50", 50.0, 2.3e5, false, true, 0.0, LargeVolume),
        entry("COLIBRE-100", 100.0, 1.84e6, false, true, 0.0, LargeVolume),
        entry("COLIBRE-200", 200.0, 1.84e6, false, true, 0.0, LargeVolume),
        entry("COLIBRE-400", 400.0, 1.47e7, false, true, 0.0, LargeVolume),
        entry("FLAMELS", 20.0, 2.0e7, false, true, 5.0, Zoom),
        entry("FLARES", 14.28, 1.81e6, false, true, 5.0, Zoom),
        entry("CAMELS-1", 25.0 / SIMBA_H, 2.0e7, false, true, 0.0, Zoom),
        entry("CAMELS-2", 50.0 / SIMBA_H, 2.0e7, false, true, 0.0, Zoom),
    ]
}

/// The catalog of reference survey footprints.
pub fn surveys() -> Vec<Survey> {
    vec![
        Survey {
            name: "All Sky",
            area: SolidAngle::full_sky(),
            redshift: 7.0,
        },
        Survey {
            name: "Euclid/Wide",
            area: SolidAngle::from_square_degrees(15_000.0),
            redshift: 7.0,
        },
        Survey {
            name: "Euclid/Deep",
            area: SolidAngle::from_square_degrees(40.0),
            redshift: 7.0,
        },
        Survey {
            name: "Webb/COSMOS-Web",
            area: SolidAngle::from_square_degrees(0.6),
            redshift: 7.0,
        },
        Survey {
            name: "Webb/NGDEEP",
            area: SolidAngle::from_square_arcmin(8.0),
            redshift: 7.0,
        },
    ]
}
