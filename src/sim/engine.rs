use nalgebra::Vector2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::dynamics;
use crate::dynamics::state::{ControlInput, SimState};
use crate::vehicle::{IntRange, RocketConfig};
use super::observer::{NoopObserver, StepObserver};
use super::termination::{self, Bounds, TerminationReason};

/// Altitude of the fixed deterministic start, m.
pub const DETERMINISTIC_ALTITUDE: f64 = 100.0;

// ---------------------------------------------------------------------------
// Engine: owns the episode state and advances it step by step
// ---------------------------------------------------------------------------

/// Single-vehicle landing environment.
///
/// An episode starts at [`reset`](Engine::reset) and runs for as many
/// [`step`](Engine::step) calls as the caller issues. Termination is a
/// derived classification: the engine keeps integrating after
/// [`should_terminate`](Engine::should_terminate) turns true.
#[derive(Debug)]
pub struct Engine<O = NoopObserver> {
    config: RocketConfig,
    observer: O,
    bounds: Bounds,
    rng: ChaCha8Rng,
    seed: u64,
    state: SimState,
}

impl Engine<NoopObserver> {
    /// Engine without an observer, seeded from the thread RNG.
    pub fn new(config: RocketConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: StepObserver> Engine<O> {
    /// Engine seeded from the thread RNG. The seed is logged and
    /// available through [`seed`](Engine::seed) for replay.
    pub fn with_observer(config: RocketConfig, observer: O) -> Self {
        Self::seeded(config, observer, rand::random())
    }

    /// Engine with a fixed seed: randomized resets replay exactly.
    pub fn seeded(config: RocketConfig, observer: O, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = initial_state(&config, &mut rng);
        let engine = Self { config, observer, bounds: Bounds::default(), rng, seed, state };
        engine.log_reset();
        engine
    }

    /// Start a new episode, re-sampling the start when randomization is on.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config, &mut self.rng);
        self.log_reset();
    }

    /// Advance one fixed time step with the given commands, then notify
    /// the observer. Out-of-range commands are saturated.
    pub fn step(&mut self, throttle: f64, rotation: f64) {
        self.apply(ControlInput::new(throttle, rotation));
    }

    /// [`step`](Engine::step) taking a [`ControlInput`].
    pub fn apply(&mut self, input: ControlInput) {
        dynamics::advance(&mut self.state, &self.config, input);
        self.observer
            .on_step(&self.state.position, &self.state.velocity, self.state.angle);
    }

    pub fn should_terminate(&self) -> bool {
        self.termination_reason().is_some()
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        termination::check(&self.state, &self.bounds)
    }

    /// 1 for a soft landing under the configured policy, 0 otherwise.
    pub fn reward(&self) -> u32 {
        self.config.reward_policy.evaluate(&self.state)
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &RocketConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the engine and hand back the observer, e.g. to finish a recorder.
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn log_reset(&self) {
        debug!(
            random = !self.config.disable_random_coords,
            seed = self.seed,
            x = self.state.position.x,
            y = self.state.position.y,
            vy = self.state.velocity.y,
            "episode reset"
        );
    }
}

// ---------------------------------------------------------------------------
// Reset policy
// ---------------------------------------------------------------------------

fn initial_state(config: &RocketConfig, rng: &mut impl Rng) -> SimState {
    if config.disable_random_coords {
        return SimState::initial(
            Vector2::new(0.0, DETERMINISTIC_ALTITUDE),
            Vector2::zeros(),
            config.fuel_capacity,
        );
    }

    let x = sample(rng, config.starting_position_x);
    let y = sample(rng, config.starting_position_y);
    let descent = sample(rng, config.starting_velocity_range);
    // starting_angle_range is reserved; the vehicle always starts upright.
    SimState::initial(Vector2::new(x, y), Vector2::new(0.0, -descent), config.fuel_capacity)
}

/// Uniform inclusive integer sample. Panics on an empty range.
fn sample(rng: &mut impl Rng, range: IntRange) -> f64 {
    rng.random_range(range.min..=range.max) as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
