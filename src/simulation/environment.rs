//! Simulation environment
//!
//! An `Environment` borrows bodies that belong to the caller and steps them
//! forward together. Once the environment is dropped the caller reads the
//! updated bodies directly.
//!
//! ```
//! use gravsim::{Body, Environment, NVec3};
//!
//! let mut a = Body::at_rest(NVec3::new(0.0, 0.0, 0.0), 5000.0);
//! let mut b = Body::at_rest(NVec3::new(0.0, 0.0, 100.0), 5000.0);
//!
//! let mut space = Environment::new();
//! space.add_body(&mut a);
//! space.add_body(&mut b);
//! space.simulate_intervals(10, 1.0);
//! drop(space);
//!
//! // attraction pulls a toward b (+z)
//! assert!(a.momentum.z > 0.0);
//! ```

use super::forces::{net_forces, ForceObserver};
use super::integrator::symplectic_euler;
use super::states::Body;
use super::vector::NVec3;

pub struct Environment<'a> {
    bodies: Vec<&'a mut Body>,
    observer: Option<Box<dyn ForceObserver + 'a>>,
}

impl<'a> Environment<'a> {
    /// Create an empty environment
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            observer: None,
        }
    }

    /// Hand every step's net forces to `observer` before they are applied
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ForceObserver + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn add_body(&mut self, body: &'a mut Body) {
        self.bodies.push(body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().map(|b| &**b)
    }

    /// Simulate `time_span` in steps of `interval`
    /// (ex 24 hours at 10 second intervals)
    ///
    /// Only whole intervals are run, a remainder shorter than `interval` is
    /// dropped. The count is the floor of the f64 ratio, so `simulate(0.3, 0.1)`
    /// runs 2 steps (0.3 / 0.1 == 2.9999999999999996) and huge ratios saturate
    /// at `u64::MAX`. Returns the number of steps taken.
    pub fn simulate(&mut self, time_span: f64, interval: f64) -> u64 {
        // `as` saturates: negative or NaN ratios give 0 steps
        let steps = (time_span / interval).floor() as u64;
        self.simulate_intervals(steps, interval);
        steps
    }

    /// Simulate exactly `count` steps of `interval`
    /// (ex 10 intervals of 30 seconds)
    pub fn simulate_intervals(&mut self, count: u64, interval: f64) {
        for _ in 0..count {
            self.step(interval);
        }
    }

    /// Advance all bodies by one step of `time_step`
    pub fn step(&mut self, time_step: f64) {
        // Forces from the pre-step positions of every body
        let forces = net_forces(&self.bodies);

        if let Some(observer) = self.observer.as_mut() {
            observer.observe(&forces);
        }

        symplectic_euler(&mut self.bodies, &forces, time_step);
    }

    /// Sum of all momenta, constant for an isolated system up to rounding
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies()
            .map(|b| b.momentum)
            .fold(NVec3::zeros(), |acc, p| acc + p)
    }

    /// Mean position of the bodies, `None` when empty
    pub fn centroid(&self) -> Option<NVec3> {
        if self.bodies.is_empty() {
            return None;
        }
        let sum = self
            .bodies()
            .map(|b| b.position)
            .fold(NVec3::zeros(), |acc, x| acc + x);
        Some(sum / self.bodies.len() as f64)
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}
