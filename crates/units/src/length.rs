use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Kilometers per megaparsec (IAU 2015 definition of the parsec)
pub const MPC_TO_KM: f64 = 3.0856775814913673e19;
/// Megaparsecs per gigaparsec
pub const GPC_TO_MPC: f64 = 1.0e3;

/// A cosmological distance quantity using f64 precision.
///
/// The `Length` struct represents distances with comoving megaparsecs (Mpc)
/// as the base unit. This is the natural choice for extragalactic and
/// survey-volume calculations: the Hubble distance c/H0 and comoving
/// distances both land in the thousands of Mpc.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// // The Hubble distance for H0 = 67.74 km/s/Mpc
/// let hubble = Length::from_mpc(299792.458 / 67.74);
///
/// // A gigaparsec-scale distance
/// let distance = Length::from_gpc(8.8);
///
/// // Convert between units
/// let in_gpc = hubble.to_gpc();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: Mpc

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in megaparsecs.
    pub fn from_mpc(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in gigaparsecs.
    pub fn from_gpc(value: f64) -> Self {
        Self(value * GPC_TO_MPC)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / MPC_TO_KM)
    }

    /// Returns the length in megaparsecs.
    pub fn to_mpc(&self) -> f64 {
        self.0
    }

    /// Converts the length to gigaparsecs.
    pub fn to_gpc(&self) -> f64 {
        self.0 / GPC_TO_MPC
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * MPC_TO_KM
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
