use std::io;

use thiserror::Error;

/// Errors raised while loading or checking a [`RocketConfig`](crate::vehicle::RocketConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("`{field}` is an empty range [{min}, {max}]")]
    EmptyRange { field: &'static str, min: i64, max: i64 },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the step recorder's output sink.
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("failed to write step record: {0}")]
    Io(#[from] io::Error),
}
