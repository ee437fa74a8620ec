//! Build runnable simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` bundle
//! containing:
//! - run parameters (`Parameters`)
//! - the bodies at t = 0, owned by the scenario
//!
//! `Scenario::run` lends the bodies to an `Environment` for the length of the
//! run, so they can be read back afterwards

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::environment::Environment;
use crate::simulation::forces::ForceObserver;
use crate::simulation::params::{Parameters, Run};
use crate::simulation::states::Body;
use crate::simulation::vector::NVec3;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                let momentum = bc.p.map(NVec3::from).unwrap_or_else(NVec3::zeros);
                Body::new(NVec3::from(bc.x), momentum, bc.m)
            })
            .collect();

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let run = match (p_cfg.intervals, p_cfg.time_span) {
            (Some(count), _) => Run::Intervals(count),
            (None, Some(span)) => Run::TimeSpan(span),
            (None, None) => Run::Intervals(0),
        };
        let parameters = Parameters {
            interval: p_cfg.interval,
            run,
        };

        Self { parameters, bodies }
    }

    /// Run the scenario to completion, returns the number of steps taken
    /// Pass `()` as the observer to run silently
    pub fn run<'s, O: ForceObserver + 's>(&'s mut self, observer: O) -> u64 {
        let mut space = Environment::new().with_observer(observer);
        for body in self.bodies.iter_mut() {
            space.add_body(body);
        }

        let interval = self.parameters.interval;
        match self.parameters.run {
            Run::Intervals(count) => {
                space.simulate_intervals(count, interval);
                count
            }
            Run::TimeSpan(span) => space.simulate(span, interval),
        }
    }
}
