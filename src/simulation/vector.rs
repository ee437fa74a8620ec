//! 3D vector primitive for the simulation.
//!
//! `NVec3` is nalgebra's `Vector3<f64>`, so `+`, `-`, `* f64`, `/ f64`,
//! `magnitude()` and `normalize()` all return new values and never touch
//! their operands.
//!
//! Precision is `f64`. Rust has no portable extended (80-bit) float, so
//! long runs accumulate rounding error at double precision.
//!
//! `normalize()` on the zero vector divides by a zero magnitude and yields
//! NaN components. That is left as-is.

use std::fmt;

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// Scale `direction` by `magnitude`
/// `direction` is not normalized here, pass a unit vector
pub fn from_magnitude(magnitude: f64, direction: NVec3) -> NVec3 {
    direction * magnitude
}

/// Display adapter printing a vector as `< x, y, z >`
pub struct Bracketed<'a>(pub &'a NVec3);

impl fmt::Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "< {}, {}, {} >", self.0.x, self.0.y, self.0.z)
    }
}
