use gravsim::{bench_step, Bracketed, PrintForces, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` if not a path
    #[arg(short, long, default_value = "tetrahedron.yaml")]
    file_name: String,

    /// Print every body's net force on every step
    #[arg(long)]
    forces: bool,

    /// Time the step function instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = ScenarioConfig::from_path(&scenario_path(&args.file_name))?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    let steps = if args.forces {
        scenario.run(PrintForces)
    } else {
        scenario.run(())
    };

    println!(
        "{} bodies, {} steps of {} s",
        scenario.bodies.len(),
        steps,
        scenario.parameters.interval
    );
    for (i, body) in scenario.bodies.iter().enumerate() {
        println!(
            "body {}: x = {}  p = {}",
            i,
            Bracketed(&body.position),
            Bracketed(&body.momentum)
        );
    }

    Ok(())
}
