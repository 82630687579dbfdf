use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::reward::RewardPolicy;

// ---------------------------------------------------------------------------
// Inclusive integer sampling range
// ---------------------------------------------------------------------------

/// Inclusive `[min, max]` integer range. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl From<(i64, i64)> for IntRange {
    fn from((min, max): (i64, i64)) -> Self {
        Self { min, max }
    }
}

impl From<IntRange> for (i64, i64) {
    fn from(r: IntRange) -> Self {
        (r.min, r.max)
    }
}

// ---------------------------------------------------------------------------
// Vehicle and scenario configuration
// ---------------------------------------------------------------------------

/// Physical and randomization parameters. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub mass: f64,          // kg, dry
    pub fuel_capacity: f64, // kg
    pub max_thrust: f64,    // force units at full throttle
    pub burn_rate: f64,     // kg/s at full throttle
    /// Initial descent speed; the sampled value is negated.
    pub starting_velocity_range: IntRange,
    /// Degrees. Currently inert: reset always starts at angle 0.
    pub starting_angle_range: IntRange,
    pub starting_position_x: IntRange,
    pub starting_position_y: IntRange,
    /// Start from the fixed (0, 100) scenario instead of sampling.
    pub disable_random_coords: bool,
    pub reward_policy: RewardPolicy,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            mass: 2.0,
            fuel_capacity: 20.0,
            max_thrust: 1000.0,
            burn_rate: 5.0,
            starting_velocity_range: IntRange::new(5, 15),
            starting_angle_range: IntRange::new(-10, 10),
            starting_position_x: IntRange::new(-20, 20),
            starting_position_y: IntRange::new(80, 120),
            disable_random_coords: false,
            reward_policy: RewardPolicy::Lenient,
        }
    }
}

impl RocketConfig {
    pub fn builder() -> RocketConfigBuilder {
        RocketConfigBuilder { config: Self::default() }
    }

    /// Wet mass at the start of an episode.
    pub fn total_mass(&self) -> f64 {
        self.mass + self.fuel_capacity
    }

    /// Check the parameters for values the engine cannot sensibly run with.
    ///
    /// The engine itself never calls this; it is for loaders and callers
    /// that want a structured error instead of a panic at reset time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::NonPositive { field: "mass", value: self.mass });
        }
        for (field, value) in [
            ("fuel_capacity", self.fuel_capacity),
            ("max_thrust", self.max_thrust),
            ("burn_rate", self.burn_rate),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        for (field, range) in [
            ("starting_velocity_range", self.starting_velocity_range),
            ("starting_angle_range", self.starting_angle_range),
            ("starting_position_x", self.starting_position_x),
            ("starting_position_y", self.starting_position_y),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptyRange { field, min: range.min, max: range.max });
            }
        }
        if let RewardPolicy::PositionAware { max_horizontal_error } = self.reward_policy {
            if !(max_horizontal_error.is_finite() && max_horizontal_error > 0.0) {
                return Err(ConfigError::NonPositive {
                    field: "max_horizontal_error",
                    value: max_horizontal_error,
                });
            }
        }
        Ok(())
    }

    /// Parse a JSON document. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

// ---------------------------------------------------------------------------
// Config builder
// ---------------------------------------------------------------------------

pub struct RocketConfigBuilder {
    config: RocketConfig,
}

impl RocketConfigBuilder {
    pub fn mass(mut self, v: f64) -> Self { self.config.mass = v; self }
    pub fn fuel_capacity(mut self, v: f64) -> Self { self.config.fuel_capacity = v; self }
    pub fn max_thrust(mut self, v: f64) -> Self { self.config.max_thrust = v; self }
    pub fn burn_rate(mut self, v: f64) -> Self { self.config.burn_rate = v; self }
    pub fn starting_velocity_range(mut self, min: i64, max: i64) -> Self { self.config.starting_velocity_range = IntRange::new(min, max); self }
    pub fn starting_angle_range(mut self, min: i64, max: i64) -> Self { self.config.starting_angle_range = IntRange::new(min, max); self }
    pub fn starting_position_x(mut self, min: i64, max: i64) -> Self { self.config.starting_position_x = IntRange::new(min, max); self }
    pub fn starting_position_y(mut self, min: i64, max: i64) -> Self { self.config.starting_position_y = IntRange::new(min, max); self }
    pub fn disable_random_coords(mut self, v: bool) -> Self { self.config.disable_random_coords = v; self }
    pub fn reward_policy(mut self, v: RewardPolicy) -> Self { self.config.reward_policy = v; self }

    pub fn build(self) -> RocketConfig {
        self.config
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Fixed start at (0, 100), at rest.
    pub fn deterministic() -> RocketConfig {
        RocketConfig::builder().disable_random_coords(true).build()
    }

    /// Randomized starts with the stricter landing criterion.
    pub fn precision_landing() -> RocketConfig {
        RocketConfig::builder()
            .reward_policy(RewardPolicy::PositionAware { max_horizontal_error: 5.0 })
            .build()
    }
}
