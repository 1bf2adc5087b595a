//! Text-overlay synchronizer.
//!
//! The caption falls and fades in lockstep with its burst without
//! re-running any particle simulation: cumulative fall distance has a
//! closed form because the discrete recurrence
//! `y += v; v = F*v + g` (starting from rest) telescopes to
//! `drop(n) = g * [ n/(1-F) - (1-F^n)/(1-F)^2 ]`.

use crate::shapes::ShapeProfile;
use serde::Serialize;

/// Cosmetic grow-as-it-fades multiplier cap.
const SCALE_GROW: f32 = 0.18;

/// One sampled caption pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaptionFrame {
    /// 1 at explosion, linear down to 0.
    pub opacity: f32,
    /// Pixels fallen since explosion, matching the particle recurrence.
    pub y_offset: f32,
    /// 1.0 growing to at most 1 + SCALE_GROW.
    pub scale: f32,
}

/// Samples caption pose from elapsed time since explosion. Carries no
/// clock of its own; the lifecycle machine restarts it when the burst
/// begins and feeds it the same wall-clock elapsed time it renders with.
#[derive(Debug, Clone)]
pub struct CaptionTimeline {
    duration_secs: f32,
    gravity: f32,
    friction: f32,
    physics_hz: f32,
}

impl CaptionTimeline {
    pub fn new(duration_secs: f32, profile: &ShapeProfile, physics_hz: f32) -> Self {
        Self {
            duration_secs: duration_secs.max(0.1),
            gravity: profile.gravity,
            friction: profile.friction,
            physics_hz,
        }
    }

    /// Closed-form cumulative fall distance after `n` physics steps for a
    /// particle starting at rest. Fractional `n` interpolates smoothly.
    pub fn drop_distance(&self, n: f32) -> f32 {
        // evaluated in f64 so the subtraction of the two large terms
        // stays well inside the required tolerance
        let f = self.friction as f64;
        let g = self.gravity as f64;
        let n = n as f64;
        let one_minus_f = 1.0 - f;
        if one_minus_f.abs() < 1e-9 {
            // undamped limit: sum of k*g for k < n
            return (g * n * (n - 1.0) * 0.5) as f32;
        }
        (g * (n / one_minus_f - (1.0 - f.powf(n)) / (one_minus_f * one_minus_f))) as f32
    }

    pub fn sample(&self, elapsed_ms: f32) -> CaptionFrame {
        let t = (elapsed_ms / (self.duration_secs * 1000.0)).clamp(0.0, 1.0);
        let n = (elapsed_ms / 1000.0).max(0.0) * self.physics_hz;
        CaptionFrame {
            opacity: 1.0 - t,
            y_offset: self.drop_distance(n),
            scale: 1.0 + SCALE_GROW * t,
        }
    }
}
