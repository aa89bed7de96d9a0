use crate::error::{check_redshift, CosmologyError};
use crate::parameters::CosmologyParameters;

/// The dimensionless expansion rate E(z) = H(z)/H0.
///
/// For a flat matter + dark-energy universe:
/// E(z) = √(Om0·(1+z)³ + Ode0)
///
/// Rejects z < 0; the function itself is well defined down to z = −1, but
/// nothing in this crate evaluates it before the present epoch.
///
/// # Examples
///
/// ```rust
/// use cosmology::{expansion_factor, CosmologyParameters};
///
/// let params = CosmologyParameters::planck2015();
/// let e0 = expansion_factor(0.0, &params).unwrap();
/// assert!((e0 - 1.0).abs() < 1e-10);
/// ```
pub fn expansion_factor(z: f64, params: &CosmologyParameters) -> Result<f64, CosmologyError> {
    check_redshift(z)?;
    Ok(expansion_rate(z, params))
}

/// Unchecked E(z) for internal hot loops (the Simpson integrator evaluates
/// it a thousand times per distance call). Callers guarantee z ≥ 0.
pub(crate) fn expansion_rate(z: f64, params: &CosmologyParameters) -> f64 {
    let a = 1.0 / (1.0 + z);
    (params.om0() / (a * a * a) + params.ode0()).sqrt()
}
