use units::Mass;

use crate::error::{check_positive, CosmologyError};

/// Minimum resolved stellar mass as a multiple of the gas-particle mass.
///
/// A galaxy needs on the order of a hundred star-forming mass elements
/// before its stellar mass is trustworthy, so the convention is
/// M_*,min = 100 × m_g.
pub const STELLAR_TO_GAS_MASS_RATIO: f64 = 100.0;

/// log10 of the minimum resolved stellar mass, in solar masses, for a
/// simulation with baryonic mass resolution `gas_particle_mass`.
///
/// Rejects non-positive masses (the logarithm has no value there).
///
/// # Examples
///
/// ```rust
/// use cosmology::min_resolved_stellar_mass_log10;
/// use units::Mass;
///
/// // EAGLE-Ref: m_g = 1.81e6 M☉ resolves stellar masses above ~10^8.26 M☉
/// let limit = min_resolved_stellar_mass_log10(Mass::from_solar_masses(1.81e6)).unwrap();
/// assert!((limit - 8.2577).abs() < 1e-4);
/// ```
pub fn min_resolved_stellar_mass_log10(gas_particle_mass: Mass) -> Result<f64, CosmologyError> {
    check_positive("gas particle mass", gas_particle_mass.to_solar_masses())?;
    Ok((gas_particle_mass * STELLAR_TO_GAS_MASS_RATIO).log10())
}
