use units::Length;

use crate::error::{check_redshift, CosmologyError};
use crate::expansion::expansion_rate;
use crate::parameters::CosmologyParameters;

/// Number of equal Simpson panels spanning [0, z].
///
/// Fixed rather than adaptive: the cost of a distance call is constant and
/// the same (z, parameters) pair always produces bit-identical output.
/// Against an adaptive-quadrature reference the relative error stays below
/// 1e-6 for z up to 20, more than enough for survey comparisons.
const INTEGRATION_STEPS: usize = 1000;

/// The line-of-sight comoving distance D_C(z) in Mpc.
///
/// D_C(z) = D_H · ∫₀^z dz'/E(z')
///
/// The integral is evaluated with the composite Simpson rule: endpoints
/// weighted 1, odd interior points 4, even interior points 2, the sum
/// scaled by dz/3.
///
/// # Examples
///
/// ```rust
/// use cosmology::{comoving_distance, CosmologyParameters};
///
/// let params = CosmologyParameters::planck2015();
/// let dc = comoving_distance(7.0, &params).unwrap();
/// assert!((dc.to_mpc() - 8825.6).abs() < 10.0);
/// ```
pub fn comoving_distance(z: f64, params: &CosmologyParameters) -> Result<Length, CosmologyError> {
    check_redshift(z)?;

    // A zero span degenerates to dz = 0; return exactly zero rather than
    // summing a thousand zero-width panels.
    if z == 0.0 {
        return Ok(Length::zero());
    }

    let dz = z / INTEGRATION_STEPS as f64;
    let mut sum = 0.0;

    for i in 0..=INTEGRATION_STEPS {
        let zi = i as f64 * dz;
        let weight = if i == 0 || i == INTEGRATION_STEPS {
            1.0
        } else if i % 2 == 0 {
            2.0
        } else {
            4.0
        };
        sum += weight / expansion_rate(zi, params);
    }

    Ok(params.hubble_distance() * (sum * dz / 3.0))
}
