//! Fixed-step particle physics.
//!
//! The simulator advances particle state in constant-size ticks; the
//! engine's accumulator decides how many ticks a wall-clock delta is
//! worth. Nothing in here knows about rendering rates.

mod particle;
mod rocket;
mod simulator;

pub use particle::{Particle, TrailPoint};
pub use rocket::{Rocket, LAUNCH_DECEL, LAUNCH_SPEED_MAX, LAUNCH_SPEED_MIN};
pub use simulator::{decay_per_tick, step, NOMINAL_PHYSICS_HZ};
