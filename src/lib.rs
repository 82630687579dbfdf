//! Planar thrust-vectored rocket landing environment.
//!
//! [`sim::Engine`] owns the episode state and advances it one fixed step at
//! a time from a throttle and rotation command. Callers poll
//! `should_terminate()` and `reward()` to drive a control or training loop.
//! Recording and logging plug in through [`sim::StepObserver`].

pub mod dynamics;
pub mod error;
pub mod gnc;
pub mod io;
pub mod sim;
pub mod vehicle;

pub use dynamics::state::{ControlInput, SimState, G0, TIME_STEP};
pub use error::{ConfigError, RecorderError};
pub use sim::{Engine, RewardPolicy, StepObserver, TerminationReason};
pub use vehicle::RocketConfig;
