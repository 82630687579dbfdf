use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2
pub const TIME_STEP: f64 = 0.1; // fixed integration step, s

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Full episode state at a single point in time.
/// Frame: x horizontal, y vertical (altitude), origin at the landing target.
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    pub position: Vector2<f64>,          // m
    pub velocity: Vector2<f64>,          // m/s
    pub angle: f64,                      // rad from vertical (0 = thrust straight up)
    pub angular_velocity: f64,           // rad/s
    pub fuel_remaining: f64,             // kg
    pub time_elapsed: f64,               // s
    pub time_step: f64,                  // s
    pub starting_position: Vector2<f64>, // m
    pub target_position: Vector2<f64>,   // m, always the origin
}

impl SimState {
    /// Fresh episode state at rest orientation with a full tank.
    pub fn initial(position: Vector2<f64>, velocity: Vector2<f64>, fuel: f64) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
            angular_velocity: 0.0,
            fuel_remaining: fuel,
            time_elapsed: 0.0,
            time_step: TIME_STEP,
            starting_position: position,
            target_position: Vector2::zeros(),
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn has_fuel(&self) -> bool {
        self.fuel_remaining > 0.0
    }

    /// Horizontal miss distance to the landing target.
    pub fn horizontal_error(&self) -> f64 {
        (self.position.x - self.target_position.x).abs()
    }
}

// ---------------------------------------------------------------------------
// Control input
// ---------------------------------------------------------------------------

/// One step's worth of commands.
///
/// `throttle` is the fraction of maximum thrust, `rotation` an angular
/// acceleration command. Both are saturated rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    pub throttle: f64, // [0, 1]
    pub rotation: f64, // [-1, 1]
}

impl ControlInput {
    pub fn new(throttle: f64, rotation: f64) -> Self {
        Self { throttle, rotation }
    }

    /// Saturate both channels to their legal ranges. NaN maps to 0.
    pub fn clamped(self) -> Self {
        Self {
            throttle: saturate(self.throttle, 0.0, 1.0),
            rotation: saturate(self.rotation, -1.0, 1.0),
        }
    }
}

fn saturate(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(lo, hi)
    }
}
