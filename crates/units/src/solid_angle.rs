use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Square arcminutes per steradian: (180/π)² × 3600
pub const ARCMIN2_PER_STERADIAN: f64 =
    (180.0 / std::f64::consts::PI) * (180.0 / std::f64::consts::PI) * 3600.0;

/// Square arcminutes per square degree
pub const ARCMIN2_PER_DEG2: f64 = 3600.0;

/// A solid-angle (sky area) quantity using f64 precision.
///
/// The `SolidAngle` struct represents patches of sky with steradians as the
/// base unit, the natural unit of the comoving volume element dV/dz/dΩ.
/// Survey footprints are usually quoted in square arcminutes or square
/// degrees, so both conversions are provided.
///
/// # Examples
///
/// ```rust
/// use units::SolidAngle;
///
/// // The Euclid deep field: 40 deg²
/// let euclid_deep = SolidAngle::from_square_degrees(40.0);
///
/// // The JWST NGDEEP footprint: 8 arcmin²
/// let ngdeep = SolidAngle::from_square_arcmin(8.0);
///
/// let in_arcmin2 = euclid_deep.to_square_arcmin();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SolidAngle(f64); // Base unit: steradian

impl SolidAngle {
    /// Creates a zero solid angle value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// The full sky: 4π steradians.
    pub fn full_sky() -> Self {
        Self(4.0 * std::f64::consts::PI)
    }

    /// Creates a new `SolidAngle` from a value in steradians.
    pub fn from_steradians(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `SolidAngle` from a value in square arcminutes.
    pub fn from_square_arcmin(value: f64) -> Self {
        Self(value / ARCMIN2_PER_STERADIAN)
    }

    /// Creates a new `SolidAngle` from a value in square degrees.
    pub fn from_square_degrees(value: f64) -> Self {
        Self(value * ARCMIN2_PER_DEG2 / ARCMIN2_PER_STERADIAN)
    }

    /// Returns the solid angle in steradians.
    pub fn to_steradians(&self) -> f64 {
        self.0
    }

    /// Converts the solid angle to square arcminutes.
    pub fn to_square_arcmin(&self) -> f64 {
        self.0 * ARCMIN2_PER_STERADIAN
    }

    /// Converts the solid angle to square degrees.
    pub fn to_square_degrees(&self) -> f64 {
        self.0 * ARCMIN2_PER_STERADIAN / ARCMIN2_PER_DEG2
    }
}

impl Add for SolidAngle {
    type Output = SolidAngle;

    fn add(self, rhs: SolidAngle) -> SolidAngle {
        SolidAngle(self.0 + rhs.0)
    }
}

impl Sub for SolidAngle {
    type Output = SolidAngle;

    fn sub(self, rhs: SolidAngle) -> SolidAngle {
        SolidAngle(self.0 - rhs.0)
    }
}

impl Mul<f64> for SolidAngle {
    type Output = SolidAngle;

    fn mul(self, rhs: f64) -> SolidAngle {
        SolidAngle(self.0 * rhs)
    }
}

impl Div<f64> for SolidAngle {
    type Output = SolidAngle;

    fn div(self, rhs: f64) -> SolidAngle {
        SolidAngle(self.0 / rhs)
    }
}

/// Division of SolidAngle by SolidAngle returns a dimensionless ratio
impl Div for SolidAngle {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * SolidAngle (commutative multiplication)
impl Mul<SolidAngle> for f64 {
    type Output = SolidAngle;

    fn mul(self, rhs: SolidAngle) -> SolidAngle {
        rhs * self
    }
}
