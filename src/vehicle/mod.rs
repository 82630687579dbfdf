pub mod config;

pub use config::{presets, IntRange, RocketConfig, RocketConfigBuilder};
