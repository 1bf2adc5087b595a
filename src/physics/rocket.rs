//! Launch-phase controller: the ascending projectile.
//!
//! A discrete constant-deceleration model. Vertical velocity is negative
//! while ascending; the decel constant (scaled by burst size, heavier
//! shells climb slower) eats into it each tick until the rocket reaches
//! its target, stalls at apex, or escapes past the viewport top.

use super::TrailPoint;

/// Baseline deceleration in pixels per tick squared.
pub const LAUNCH_DECEL: f32 = 0.05;

/// The user-facing launch-speed multiplier is clamped to a narrow band so
/// it cannot grossly over/undershoot the target height.
pub const LAUNCH_SPEED_MIN: f32 = 0.9;
pub const LAUNCH_SPEED_MAX: f32 = 1.1;

const TAIL_LEN: usize = 5;
const TAIL_SPACING: f32 = 3.0;

#[derive(Debug, Clone)]
pub struct Rocket {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    target_y: f32,
    decel: f32,
}

impl Rocket {
    /// Build a rocket at the viewport bottom aimed at `target_y`.
    ///
    /// Initial velocity comes from inverse kinematics on the continuous
    /// approximation of the discrete recurrence: v0 = -sqrt(2 a dy),
    /// scaled by the clamped launch-speed multiplier.
    pub fn new(x: f32, start_y: f32, target_y: f32, size: f32, launch_speed: f32) -> Self {
        let decel = LAUNCH_DECEL * size.max(0.1);
        let dy = (start_y - target_y).max(0.0);
        let multiplier = launch_speed.clamp(LAUNCH_SPEED_MIN, LAUNCH_SPEED_MAX);
        Self {
            x,
            y: start_y,
            vy: -(2.0 * decel * dy).sqrt() * multiplier,
            target_y,
            decel,
        }
    }

    /// Advance one physics tick. Returns true when the explosion trigger
    /// fires: target reached, apex stall, or past the viewport top.
    pub fn step(&mut self) -> bool {
        self.y += self.vy;
        self.vy += self.decel;
        self.y <= self.target_y || self.vy >= 0.0 || self.y < 0.0
    }

    /// Thin white tail behind the rocket, for rendering only. Not part of
    /// the physics state.
    pub fn tail(&self) -> Vec<TrailPoint> {
        (1..=TAIL_LEN)
            .map(|i| TrailPoint {
                x: self.x,
                y: self.y + i as f32 * TAIL_SPACING,
                opacity: 1.0 - i as f32 / (TAIL_LEN as f32 + 1.0),
            })
            .collect()
    }
}
