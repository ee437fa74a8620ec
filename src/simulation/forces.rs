//! Force phase for the n-body engine
//!
//! Sums pairwise Newtonian gravity into one net force per body, and defines
//! the observer hook that sees those forces before they are applied

use super::states::Body;
use super::vector::{Bracketed, NVec3};

/// Net gravitational force on every body, in body order
///
/// Every entry is computed from the same snapshot of positions, so the result
/// does not depend on which body is visited first. Each pair is evaluated
/// twice, once as (i, j) and once as (j, i).
pub fn net_forces(bodies: &[&mut Body]) -> Vec<NVec3> {
    let n = bodies.len();

    (0..n)
        .map(|i| {
            // Everything except body i pulls on body i
            (0..n)
                .filter(|&j| j != i)
                .fold(NVec3::zeros(), |acc, j| {
                    acc + Body::calculate_gravity(&*bodies[i], &*bodies[j])
                })
        })
        .collect()
}

/// Receives the net forces of each step before they are applied
pub trait ForceObserver {
    fn observe(&mut self, net_forces: &[NVec3]);
}

/// Prints each net force as `< x, y, z >`, one line per body
pub struct PrintForces;

impl ForceObserver for PrintForces {
    fn observe(&mut self, net_forces: &[NVec3]) {
        for force in net_forces {
            println!("{}", Bracketed(force));
        }
    }
}

/// Discards the forces
impl ForceObserver for () {
    fn observe(&mut self, _net_forces: &[NVec3]) {}
}

/// Records every step's forces, outer index is the step
impl ForceObserver for Vec<Vec<NVec3>> {
    fn observe(&mut self, net_forces: &[NVec3]) {
        self.push(net_forces.to_vec());
    }
}

impl<T: ForceObserver + ?Sized> ForceObserver for &mut T {
    fn observe(&mut self, net_forces: &[NVec3]) {
        (**self).observe(net_forces);
    }
}

impl<T: ForceObserver + ?Sized> ForceObserver for Box<T> {
    fn observe(&mut self, net_forces: &[NVec3]) {
        (**self).observe(net_forces);
    }
}
