//! Math type aliases and helper functions.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Convert an angle in degrees to radians.
#[inline]
pub fn degree_to_radian(degrees: f32) -> f32 {
    degrees.to_radians()
}
