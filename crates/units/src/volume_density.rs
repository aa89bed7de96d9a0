use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::solid_angle::ARCMIN2_PER_STERADIAN;

/// A differential comoving volume quantity using f64 precision.
///
/// The `VolumeDensity` struct represents the comoving volume element
/// dV/dz/dΩ with Mpc³ per steradian (per unit redshift) as the base unit,
/// the standard form of the volume element in observational cosmology.
///
/// Typical magnitudes for a Planck-like cosmology:
/// - z = 1: ~2.9 × 10¹⁰ Mpc³/sr
/// - z = 7: ~2.7 × 10¹⁰ Mpc³/sr
/// - the element peaks near z ≈ 2.5 and declines slowly beyond
///
/// # Examples
///
/// ```rust
/// use units::VolumeDensity;
///
/// let element = VolumeDensity::from_mpc3_per_sr(2.7e10);
/// let per_arcmin2 = element.to_mpc3_per_arcmin2();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: Mpc³/sr

impl VolumeDensity {
    /// Creates a new `VolumeDensity` from a value in Mpc³ per steradian.
    pub fn from_mpc3_per_sr(value: f64) -> Self {
        Self(value)
    }

    /// Returns the volume element in Mpc³ per steradian.
    pub fn to_mpc3_per_sr(&self) -> f64 {
        self.0
    }

    /// Converts the volume element to Mpc³ per square arcminute.
    pub fn to_mpc3_per_arcmin2(&self) -> f64 {
        self.0 / ARCMIN2_PER_STERADIAN
    }
}

impl Add for VolumeDensity {
    type Output = VolumeDensity;

    fn add(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 + rhs.0)
    }
}

impl Sub for VolumeDensity {
    type Output = VolumeDensity;

    fn sub(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

impl Div<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn div(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 / rhs)
    }
}

/// Allow f64 * VolumeDensity (commutative multiplication)
impl Mul<VolumeDensity> for f64 {
    type Output = VolumeDensity;

    fn mul(self, rhs: VolumeDensity) -> VolumeDensity {
        rhs * self
    }
}
