use units::VolumeDensity;

use crate::distance::comoving_distance;
use crate::error::CosmologyError;
use crate::expansion::expansion_rate;
use crate::parameters::CosmologyParameters;

/// The differential comoving volume element dV/dz/dΩ in Mpc³/sr.
///
/// dV/dz/dΩ(z) = D_H · D_C(z)² / E(z)
///
/// This is the volume per unit redshift per unit solid angle in a flat
/// universe, the quantity that turns an observed sky area and a redshift
/// slice into a comoving volume.
///
/// # Examples
///
/// ```rust
/// use cosmology::{comoving_volume_element, CosmologyParameters};
///
/// let params = CosmologyParameters::planck2015();
/// let element = comoving_volume_element(7.0, &params).unwrap();
/// assert!(element.to_mpc3_per_sr() > 2.0e10);
/// ```
pub fn comoving_volume_element(
    z: f64,
    params: &CosmologyParameters,
) -> Result<VolumeDensity, CosmologyError> {
    let dc = comoving_distance(z, params)?.to_mpc();
    let dh = params.hubble_distance().to_mpc();

    Ok(VolumeDensity::from_mpc3_per_sr(
        dh * dc * dc / expansion_rate(z, params),
    ))
}
