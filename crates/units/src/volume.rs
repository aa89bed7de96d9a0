use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::length::Length;

/// Cubic megaparsecs per cubic gigaparsec
pub const CMPC3_PER_CGPC3: f64 = 1.0e9;

/// A comoving volume quantity using f64 precision.
///
/// The `Volume` struct represents cosmological volumes with cubic comoving
/// megaparsecs (cMpc³) as the base unit, the convention used when quoting
/// simulation box sizes and survey volumes.
///
/// # Examples
///
/// ```rust
/// use units::{Length, Volume};
///
/// // The EAGLE reference box: (100 cMpc)³
/// let eagle = Volume::from_box_side(Length::from_mpc(100.0));
/// assert_eq!(eagle.to_cubic_mpc(), 1.0e6);
///
/// // A survey volume quoted directly
/// let survey = Volume::from_cubic_mpc(4.2e7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Volume(f64); // Base unit: cMpc³

impl Volume {
    /// Creates a zero volume value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Volume` from a value in cubic comoving megaparsecs.
    pub fn from_cubic_mpc(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Volume` from a value in cubic comoving gigaparsecs.
    pub fn from_cubic_gpc(value: f64) -> Self {
        Self(value * CMPC3_PER_CGPC3)
    }

    /// Creates the volume of a cubic box with the given comoving side length.
    pub fn from_box_side(side: Length) -> Self {
        Self(side.powi(3))
    }

    /// Returns the volume in cubic comoving megaparsecs.
    pub fn to_cubic_mpc(&self) -> f64 {
        self.0
    }

    /// Converts the volume to cubic comoving gigaparsecs.
    pub fn to_cubic_gpc(&self) -> f64 {
        self.0 / CMPC3_PER_CGPC3
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl Sub for Volume {
    type Output = Volume;

    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0 - rhs.0)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;

    fn mul(self, rhs: f64) -> Volume {
        Volume(self.0 * rhs)
    }
}

impl Div<f64> for Volume {
    type Output = Volume;

    fn div(self, rhs: f64) -> Volume {
        Volume(self.0 / rhs)
    }
}

/// Division of Volume by Volume returns a dimensionless ratio
impl Div for Volume {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Volume (commutative multiplication)
impl Mul<Volume> for f64 {
    type Output = Volume;

    fn mul(self, rhs: Volume) -> Volume {
        rhs * self
    }
}
