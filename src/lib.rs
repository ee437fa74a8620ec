pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::vector::{NVec3, Bracketed, from_magnitude};
pub use simulation::states::Body;
pub use simulation::params::{G, Parameters, Run};
pub use simulation::forces::{net_forces, ForceObserver, PrintForces};
pub use simulation::integrator::symplectic_euler;
pub use simulation::environment::Environment;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;
