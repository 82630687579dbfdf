use std::fmt;

use crate::dynamics::state::SimState;

/// Episodes end once the clock passes this, s.
pub const MAX_EPISODE_TIME: f64 = 256.0;

// ---------------------------------------------------------------------------
// Flight envelope
// ---------------------------------------------------------------------------

/// Rectangular region the vehicle must stay inside (inclusive edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64), // m, horizontal
    pub y: (f64, f64), // m, altitude
}

impl Default for Bounds {
    fn default() -> Self {
        Self { x: (-40.0, 40.0), y: (0.0, 150.0) }
    }
}

// ---------------------------------------------------------------------------
// Termination reasons
// ---------------------------------------------------------------------------

/// Why an episode is over. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    BelowGround,
    HorizontalOutOfBounds,
    AltitudeOutOfBounds,
    TimeLimit,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationReason::BelowGround => "below ground",
            TerminationReason::HorizontalOutOfBounds => "horizontal out of bounds",
            TerminationReason::AltitudeOutOfBounds => "altitude out of bounds",
            TerminationReason::TimeLimit => "time limit",
        };
        f.write_str(s)
    }
}

/// First termination condition `state` satisfies, if any.
pub fn check(state: &SimState, bounds: &Bounds) -> Option<TerminationReason> {
    let (x, y) = (state.position.x, state.position.y);
    if y < 0.0 {
        Some(TerminationReason::BelowGround)
    } else if !(bounds.x.0 <= x && x <= bounds.x.1) {
        Some(TerminationReason::HorizontalOutOfBounds)
    } else if !(bounds.y.0 <= y && y <= bounds.y.1) {
        Some(TerminationReason::AltitudeOutOfBounds)
    } else if state.time_elapsed > MAX_EPISODE_TIME {
        Some(TerminationReason::TimeLimit)
    } else {
        None
    }
}
