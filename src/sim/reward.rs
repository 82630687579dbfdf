use serde::{Deserialize, Serialize};

use crate::dynamics::state::SimState;

/// Below this altitude the vehicle counts as touched down.
pub const LANDING_ALTITUDE: f64 = 0.1;
/// Largest vertical speed, either sign, that still counts as soft.
pub const MAX_LANDING_SPEED: f64 = 40.0;

/// How a terminal state is scored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardPolicy {
    /// Touchdown below [`LANDING_ALTITUDE`] with bounded descent speed,
    /// wherever it happens horizontally.
    #[default]
    Lenient,
    /// As `Lenient`, and the touchdown must also be within
    /// `max_horizontal_error` of the target.
    PositionAware { max_horizontal_error: f64 },
}

impl RewardPolicy {
    /// 1 for a soft landing, 0 otherwise.
    pub fn evaluate(&self, state: &SimState) -> u32 {
        let touched_down =
            state.altitude() < LANDING_ALTITUDE && state.velocity.y.abs() <= MAX_LANDING_SPEED;
        let on_target = match *self {
            RewardPolicy::Lenient => true,
            RewardPolicy::PositionAware { max_horizontal_error } => {
                state.horizontal_error() <= max_horizontal_error
            }
        };
        u32::from(touched_down && on_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn at(x: f64, y: f64, vy: f64) -> SimState {
        SimState::initial(Vector2::new(x, y), Vector2::new(0.0, vy), 0.0)
    }

    #[test]
    fn soft_touchdown_scores() {
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, 0.05, -12.0)), 1);
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, -0.3, -12.0)), 1);
    }

    #[test]
    fn altitude_boundary_is_exclusive() {
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, 0.1, -1.0)), 0);
    }

    #[test]
    fn speed_boundary_is_inclusive() {
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, 0.0, -40.0)), 1);
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, 0.0, 40.0)), 1);
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, 0.0, -40.0001)), 0);
    }

    #[test]
    fn airborne_scores_nothing() {
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(0.0, 50.0, 0.0)), 0);
    }

    #[test]
    fn lenient_ignores_horizontal_miss() {
        assert_eq!(RewardPolicy::Lenient.evaluate(&at(35.0, 0.0, -5.0)), 1);
    }

    #[test]
    fn position_aware_requires_target_proximity() {
        let policy = RewardPolicy::PositionAware { max_horizontal_error: 5.0 };
        assert_eq!(policy.evaluate(&at(35.0, 0.0, -5.0)), 0);
        assert_eq!(policy.evaluate(&at(-5.0, 0.0, -5.0)), 1);
        assert_eq!(policy.evaluate(&at(2.0, 20.0, -5.0)), 0);
    }
}
