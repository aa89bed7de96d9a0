pub mod length;
pub mod mass;
pub mod solid_angle;
pub mod volume;
pub mod volume_density;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod volume_density_test;

pub use length::Length;
pub use mass::{Mass, SOLAR_MASS_G};
pub use solid_angle::{SolidAngle, ARCMIN2_PER_DEG2, ARCMIN2_PER_STERADIAN};
pub use volume::Volume;
pub use volume_density::VolumeDensity;
