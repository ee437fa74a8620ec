//! Core state type for the N-body simulation.
//!
//! A `Body` carries position, momentum and mass. Mass must be positive;
//! velocity is derived as `momentum / mass` and a zero mass turns it
//! into inf/NaN.

use super::params::G;
use super::vector::{from_magnitude, NVec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: NVec3, // position
    pub momentum: NVec3, // momentum (mass * velocity)
    pub mass: f64,       // mass, fixed for the whole run
}

impl Body {
    pub fn new(position: NVec3, momentum: NVec3, mass: f64) -> Self {
        Self {
            position,
            momentum,
            mass,
        }
    }

    /// Body with zero momentum
    pub fn at_rest(position: NVec3, mass: f64) -> Self {
        Self::new(position, NVec3::zeros(), mass)
    }

    /// Body at the origin with zero momentum
    pub fn with_mass(mass: f64) -> Self {
        Self::at_rest(NVec3::zeros(), mass)
    }

    pub fn velocity(&self) -> NVec3 {
        self.momentum / self.mass
    }

    /// Gravitational force acting on `body_1` due to `body_2`
    ///
    /// F = G * m1 * m2 / |r|^2 along -r, with r = x1 - x2, so the force
    /// points from `body_1` toward `body_2`
    ///
    /// Coincident positions normalize a zero vector and the result is NaN
    pub fn calculate_gravity(body_1: &Body, body_2: &Body) -> NVec3 {
        let displacement = body_1.position - body_2.position;
        let unit = displacement.normalize();
        let distance = displacement.magnitude();
        let magnitude = (G * body_1.mass * body_2.mass) / (distance * distance);

        from_magnitude(magnitude, unit * -1.0)
    }
}
