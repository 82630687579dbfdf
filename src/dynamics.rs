pub mod state;

use crate::dynamics::state::{ControlInput, SimState, G0};
use crate::vehicle::RocketConfig;

// ---------------------------------------------------------------------------
// Equations of motion (planar, semi-implicit Euler)
// ---------------------------------------------------------------------------

/// Advance `state` by one fixed time step.
///
/// Order matters and is part of the contract:
///   1. Saturate inputs
///   2. Angular dynamics — rotation command acts as angular acceleration
///   3. Gravity — uniform, always on
///   4. Thrust — along the body axis, only while fuel remains; the
///      current fuel load counts toward the accelerated mass
///   5. Position from the updated velocity
///   6. Clock
pub fn advance(state: &mut SimState, config: &RocketConfig, input: ControlInput) {
    let ControlInput { throttle, rotation } = input.clamped();
    let dt = state.time_step;

    // --- Attitude ---
    state.angular_velocity += rotation * dt;
    state.angle += state.angular_velocity * dt;

    // --- Gravity ---
    state.velocity.y -= G0 * dt;

    // --- Thrust and fuel ---
    if state.has_fuel() {
        let accel = (throttle * config.max_thrust) / (config.mass + state.fuel_remaining);
        state.velocity.x += state.angle.sin() * accel * dt;
        state.velocity.y += state.angle.cos() * accel * dt;

        let burned = (config.burn_rate * dt * throttle.max(0.0)).min(state.fuel_remaining);
        state.fuel_remaining -= burned;
    }

    // --- Kinematics ---
    state.position += state.velocity * dt;
    state.time_elapsed += dt;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
