use crate::dynamics::state::{ControlInput, SimState};

/// Trait for flight controllers.
///
/// Implement this to drive the engine from a policy: hand-tuned GNC,
/// a scripted input sequence, or a learned agent.
pub trait Controller {
    /// Compute the next step's commands from the current state.
    fn control(&mut self, state: &SimState) -> ControlInput;

    /// Reset controller internal state (e.g., PID integrators).
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Replays the same input every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLoop {
    pub input: ControlInput,
}

impl OpenLoop {
    pub fn new(throttle: f64, rotation: f64) -> Self {
        Self { input: ControlInput::new(throttle, rotation) }
    }
}

impl Controller for OpenLoop {
    fn control(&mut self, _state: &SimState) -> ControlInput {
        self.input
    }

    fn name(&self) -> &str {
        "OpenLoop"
    }
}
