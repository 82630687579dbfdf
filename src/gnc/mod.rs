pub mod controller;
pub mod pid;
pub mod lander;

pub use controller::{Controller, OpenLoop};
pub use pid::Pid;
pub use lander::LandingController;
