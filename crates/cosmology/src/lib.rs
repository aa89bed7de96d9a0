//! Flat-ΛCDM cosmology for survey-volume comparisons.
//!
//! This crate converts between comoving volumes and observed sky areas for
//! a given redshift slice. The chain of quantities, leaf first:
//!
//! 1. [`expansion_factor`] — the dimensionless expansion rate E(z)
//! 2. [`comoving_distance`] — D_C(z) by fixed-panel Simpson integration
//! 3. [`comoving_volume_element`] — dV/dz/dΩ(z) = D_H · D_C² / E
//! 4. [`volume_to_area`] / [`area_to_volume`] — the bidirectional
//!    conversion between cMpc³ and sky area
//!
//! Every function is a pure computation taking an immutable
//! [`CosmologyParameters`] by reference, so different cosmologies can be
//! evaluated concurrently without locking. Inputs outside the mathematical
//! domain are rejected with a [`CosmologyError`] before any computation.
//!
//! The [`catalog`] module carries the simulation-box and survey-footprint
//! tables this machinery was built to compare.

pub mod catalog;
pub mod distance;
pub mod error;
pub mod expansion;
pub mod parameters;
pub mod resolution;
pub mod survey;
pub mod volume_element;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod expansion_test;

pub use catalog::{simulations, surveys, SimulationBox, SimulationKind, Survey};
pub use distance::comoving_distance;
pub use error::CosmologyError;
pub use expansion::expansion_factor;
pub use parameters::{CosmologyParameters, SPEED_OF_LIGHT_KM_S};
pub use resolution::{min_resolved_stellar_mass_log10, STELLAR_TO_GAS_MASS_RATIO};
pub use survey::{area_to_volume, volume_to_area};
pub use volume_element::comoving_volume_element;
