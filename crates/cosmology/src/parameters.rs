use serde::{Deserialize, Serialize};
use units::Length;

use crate::error::{check_positive, CosmologyError};

/// The speed of light in km/s
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// An immutable flat-ΛCDM parameter set.
///
/// All distance and volume calculations take a `CosmologyParameters` by
/// reference; nothing in this crate holds cosmology state of its own, so
/// several parameter sets can be evaluated side by side (and from several
/// threads) without synchronization.
///
/// Spatial curvature is ignored throughout: Om0 + Ode0 is not required to
/// sum to exactly one, and the flat-universe distance formulae are used
/// regardless.
///
/// # Examples
///
/// ```rust
/// use cosmology::CosmologyParameters;
///
/// let planck = CosmologyParameters::planck2015();
/// let eds = CosmologyParameters::new(70.0, 1.0, 0.0).unwrap();
///
/// assert!(planck.hubble_distance().to_mpc() > 4000.0);
/// assert!(eds.hubble_distance().to_mpc() > planck.hubble_distance().to_mpc() * 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmologyParameters {
    /// Hubble constant in km/s/Mpc
    h0: f64,
    /// Present-day matter density parameter
    om0: f64,
    /// Present-day dark-energy density parameter
    ode0: f64,
    /// Speed of light in km/s
    c: f64,
}

impl CosmologyParameters {
    /// Creates a validated parameter set.
    ///
    /// H0 must be positive and both density parameters must lie in [0, 1].
    /// The speed of light is fixed; it is a parameter of the struct only so
    /// that the Hubble distance c/H0 carries its units explicitly.
    pub fn new(h0: f64, om0: f64, ode0: f64) -> Result<Self, CosmologyError> {
        check_positive("H0", h0)?;
        for (parameter, value) in [("Om0", om0), ("Ode0", ode0)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CosmologyError::DensityOutOfRange { parameter, value });
            }
        }
        Ok(Self {
            h0,
            om0,
            ode0,
            c: SPEED_OF_LIGHT_KM_S,
        })
    }

    /// The Planck 2015 reference cosmology:
    /// H0 = 67.74 km/s/Mpc, Om0 = 0.3089, Ode0 = 0.6911.
    pub fn planck2015() -> Self {
        Self {
            h0: 67.74,
            om0: 0.3089,
            ode0: 0.6911,
            c: SPEED_OF_LIGHT_KM_S,
        }
    }

    /// Hubble constant in km/s/Mpc
    pub fn h0(&self) -> f64 {
        self.h0
    }

    /// Present-day matter density parameter
    pub fn om0(&self) -> f64 {
        self.om0
    }

    /// Present-day dark-energy density parameter
    pub fn ode0(&self) -> f64 {
        self.ode0
    }

    /// Speed of light in km/s
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The Hubble distance D_H = c/H0 in Mpc.
    pub fn hubble_distance(&self) -> Length {
        Length::from_mpc(self.c / self.h0)
    }
}

impl Default for CosmologyParameters {
    fn default() -> Self {
        Self::planck2015()
    }
}
