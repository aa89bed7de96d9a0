//! Bidirectional conversion between comoving volumes and sky areas.
//!
//! Both directions evaluate the comoving volume element once, at the slice
//! center, and treat it as constant across [z − Δz/2, z + Δz/2]. This is a
//! midpoint (thin-slice) approximation, not an integral over the slice: its
//! error grows with Δz, and it is kept deliberately so that results match
//! the survey-comparison convention downstream consumers expect. For the
//! Δz ≲ 1 slices used in practice the error is well under a percent.

use units::{SolidAngle, Volume};

use crate::error::{check_positive, CosmologyError};
use crate::parameters::CosmologyParameters;
use crate::volume_element::comoving_volume_element;

/// Converts a comoving volume to the sky area it subtends in a redshift
/// slice of width `delta_z` centered on `z_center`.
///
/// Ω = V / (dV/dz/dΩ(z_center) · Δz)
///
/// Rejects non-positive volumes and slice widths, and negative redshifts.
///
/// # Examples
///
/// ```rust
/// use cosmology::{volume_to_area, CosmologyParameters};
/// use units::Volume;
///
/// let params = CosmologyParameters::planck2015();
/// let eagle = Volume::from_cubic_mpc(1.0e6);
/// let area = volume_to_area(eagle, 7.0, 1.0, &params).unwrap();
/// assert!((area.to_square_arcmin() - 432.1).abs() < 0.1);
/// ```
pub fn volume_to_area(
    volume: Volume,
    z_center: f64,
    delta_z: f64,
    params: &CosmologyParameters,
) -> Result<SolidAngle, CosmologyError> {
    check_positive("volume", volume.to_cubic_mpc())?;
    check_positive("delta_z", delta_z)?;

    let element = comoving_volume_element(z_center, params)?;
    // At z = 0 the element vanishes and no finite area holds a positive
    // volume; refuse rather than divide to infinity
    check_positive("comoving volume element", element.to_mpc3_per_sr())?;
    let area_sr = volume.to_cubic_mpc() / (element.to_mpc3_per_sr() * delta_z);

    Ok(SolidAngle::from_steradians(area_sr))
}

/// Converts a sky area to the comoving volume it encloses in a redshift
/// slice of width `delta_z` centered on `z_center`.
///
/// V = Ω · dV/dz/dΩ(z_center) · Δz
///
/// The exact algebraic inverse of [`volume_to_area`]: a round trip through
/// both functions reproduces the input to within floating-point rounding
/// (relative error below 1e-9).
///
/// # Examples
///
/// ```rust
/// use cosmology::{area_to_volume, CosmologyParameters};
/// use units::SolidAngle;
///
/// let params = CosmologyParameters::planck2015();
/// let ngdeep = SolidAngle::from_square_arcmin(8.0);
/// let volume = area_to_volume(ngdeep, 7.0, 1.0, &params).unwrap();
/// assert!(volume.to_cubic_mpc() > 1.0e4);
/// ```
pub fn area_to_volume(
    area: SolidAngle,
    z_center: f64,
    delta_z: f64,
    params: &CosmologyParameters,
) -> Result<Volume, CosmologyError> {
    check_positive("area", area.to_steradians())?;
    check_positive("delta_z", delta_z)?;

    let element = comoving_volume_element(z_center, params)?;
    let volume = area.to_steradians() * element.to_mpc3_per_sr() * delta_z;

    Ok(Volume::from_cubic_mpc(volume))
}
