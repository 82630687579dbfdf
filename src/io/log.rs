use nalgebra::Vector2;
use tracing::info;

use crate::sim::observer::StepObserver;

/// Logs every step's state at info level, values to 4 decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn format(position: &Vector2<f64>, velocity: &Vector2<f64>, angle: f64) -> String {
        format!(
            "current state: pos=[{:.4}, {:.4}], vel=[{:.4}, {:.4}], angle={:.4}",
            position.x, position.y, velocity.x, velocity.y, angle
        )
    }
}

impl StepObserver for ConsoleLogger {
    fn on_step(&mut self, position: &Vector2<f64>, velocity: &Vector2<f64>, angle: f64) {
        info!("{}", Self::format(position, velocity, angle));
    }
}
