//! Fixed-step symplectic Euler integrator for the N-body system
//!
//! Kick then drift, with the drift using the momentum the kick just wrote:
//!
//! ```text
//! p_n+1 = p_n + F_n * dt
//! x_n+1 = x_n + (p_n+1 / m) * dt
//! ```

use super::states::Body;
use super::vector::NVec3;

/// Advance every body by one step of `dt` given the net forces at `x_n`
/// `net_forces[i]` belongs to `bodies[i]`
pub fn symplectic_euler(bodies: &mut [&mut Body], net_forces: &[NVec3], dt: f64) {
    debug_assert_eq!(bodies.len(), net_forces.len(), "one net force per body");

    if bodies.is_empty() { // no bodies, return
        return;
    }

    // Kick: all momenta are updated before any position moves
    for (b, f) in bodies.iter_mut().zip(net_forces.iter()) {
        b.momentum += *f * dt;
    }

    // Drift: x_n+1 = x_n + v_n+1 * dt, v_n+1 from this body's new momentum
    for b in bodies.iter_mut() {
        let velocity = b.velocity();
        b.position += velocity * dt;
    }
}
