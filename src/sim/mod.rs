pub mod engine;
pub mod observer;
pub mod reward;
pub mod runner;
pub mod termination;

pub use engine::Engine;
pub use observer::{observe_fn, FnObserver, NoopObserver, StepObserver};
pub use reward::RewardPolicy;
pub use runner::{run_episode, EpisodeOutcome};
pub use termination::{Bounds, TerminationReason};
