use tracing::info;

use crate::dynamics::state::SimState;
use crate::gnc::Controller;
use super::engine::Engine;
use super::observer::StepObserver;
use super::termination::TerminationReason;

// ---------------------------------------------------------------------------
// Closed-loop episode
// ---------------------------------------------------------------------------

/// How an episode ended.
#[derive(Debug, Clone)]
pub struct EpisodeOutcome {
    pub steps: usize,
    pub reward: u32,
    /// `None` when the step cap was hit first.
    pub reason: Option<TerminationReason>,
    pub final_state: SimState,
}

impl EpisodeOutcome {
    pub fn landed(&self) -> bool {
        self.reward == 1
    }
}

/// Reset `engine` and `controller`, then step until termination or
/// until `max_steps` steps have been taken.
pub fn run_episode<O: StepObserver>(
    engine: &mut Engine<O>,
    controller: &mut dyn Controller,
    max_steps: Option<usize>,
) -> EpisodeOutcome {
    engine.reset();
    controller.reset();

    let mut steps = 0;
    let reason = loop {
        if let Some(reason) = engine.termination_reason() {
            break Some(reason);
        }
        if max_steps.is_some_and(|cap| steps >= cap) {
            break None;
        }
        let cmd = controller.control(engine.state());
        engine.apply(cmd);
        steps += 1;
    };

    let outcome = EpisodeOutcome {
        steps,
        reward: engine.reward(),
        reason,
        final_state: engine.state().clone(),
    };

    info!(
        controller = controller.name(),
        steps,
        reward = outcome.reward,
        reason = %reason.map_or_else(|| "step cap".to_string(), |r| r.to_string()),
        fuel = outcome.final_state.fuel_remaining,
        "episode finished"
    );

    outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
