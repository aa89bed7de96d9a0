use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with solar masses as the base
/// unit. Gas-particle masses of cosmological simulations and the stellar
/// masses derived from them are both quoted in M☉.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// // The EAGLE reference gas-particle mass
/// let gas_particle = Mass::from_solar_masses(1.81e6);
///
/// // Convert between units
/// let in_grams = gas_particle.to_grams();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    pub fn from_kg(value: f64) -> Self {
        Self::from_grams(value * 1000.0)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    pub fn to_kg(&self) -> f64 {
        self.to_grams() / 1000.0
    }

    /// Base-10 logarithm of the mass in solar masses
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }

    /// Natural logarithm
    pub fn ln(&self) -> f64 {
        self.0.ln()
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
