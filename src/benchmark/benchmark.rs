use std::time::Instant;

use crate::simulation::environment::Environment;
use crate::simulation::states::Body;
use crate::simulation::vector::NVec3;

/// Helper to build `n` bodies on a deterministic layout, no rand needed
pub fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0e5,
                (i_f * 0.13).cos() * 5.0e5,
                (i_f * 0.07).sin() * 5.0e5,
            );
            Body::at_rest(x, 5000.0)
        })
        .collect()
}

/// Time `Environment::step` for a range of n
/// Paste output directly into excel to graph
pub fn bench_step() {
    println!("N,step_ms");

    for n in [50, 100, 200, 400, 800, 1600] {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 400 { 5 } else { 1 };

        let mut bodies = make_bodies(n);
        let mut space = Environment::new();
        for body in bodies.iter_mut() {
            space.add_body(body);
        }

        // Warm up
        space.step(1.0);

        let t0 = Instant::now();
        space.simulate_intervals(steps, 1.0);
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
