use crate::dynamics::state::{ControlInput, SimState, G0};
use crate::vehicle::RocketConfig;
use super::controller::Controller;
use super::pid::Pid;

// ---------------------------------------------------------------------------
// Landing controller: descent-rate hold + attitude hold
// ---------------------------------------------------------------------------

/// Holds a constant descent rate all the way down while keeping the
/// vehicle upright. No horizontal guidance.
#[derive(Debug, Clone)]
pub struct LandingController {
    /// Commanded sink rate, m/s (positive = down).
    pub descent_rate: f64,
    /// Throttle that balances gravity at full tank.
    pub hover_throttle: f64,
    pub vertical_pid: Pid,
    pub attitude_pid: Pid,
    /// Angular rate damping gain.
    pub rate_gain: f64,
}

impl LandingController {
    pub fn new(config: &RocketConfig) -> Self {
        let hover_throttle = if config.max_thrust > 0.0 {
            (G0 * config.total_mass() / config.max_thrust).min(1.0)
        } else {
            0.0
        };
        Self {
            descent_rate: 10.0,
            hover_throttle,
            // Loop gain stays below 1 for the reference vehicle down to ~10 kg fuel
            vertical_pid: Pid::new(0.1, 0.02, 0.0),
            attitude_pid: Pid::new(1.0, 0.0, 0.0),
            rate_gain: 2.0,
        }
    }
}

impl Controller for LandingController {
    fn control(&mut self, state: &SimState) -> ControlInput {
        let dt = state.time_step;

        let vy_error = -self.descent_rate - state.velocity.y;
        let throttle = self.hover_throttle + self.vertical_pid.update(vy_error, dt);

        let rotation =
            self.attitude_pid.update(-state.angle, dt) - self.rate_gain * state.angular_velocity;

        ControlInput::new(throttle, rotation).clamped()
    }

    fn reset(&mut self) {
        self.vertical_pid.reset();
        self.attitude_pid.reset();
    }

    fn name(&self) -> &str {
        "LandingController"
    }
}
