//! Physical constant and run parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - step size (`interval`),
//! - how long to run, either a fixed step count or a time span

/// Universal gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

/// How far a run goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Run {
    Intervals(u64), // exact number of steps
    TimeSpan(f64),  // total time, truncated to whole intervals
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub interval: f64, // step size
    pub run: Run,      // run length
}
