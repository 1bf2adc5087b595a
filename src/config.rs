//! Engine configuration.
//!
//! Everything tunable is collected here and handed to the [`Stage`] at
//! construction; there is no process-wide mutable state. A seed can be
//! injected for deterministic tests.
//!
//! [`Stage`]: crate::engine::Stage

use serde::{Deserialize, Serialize};

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// Host window geometry, read-only to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build a viewport, falling back to fixed defaults when layout has
    /// not happened yet and the host reports zero or negative sizes.
    pub fn new(width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            log::warn!(
                "viewport {}x{} unusable, falling back to {}x{}",
                width,
                height,
                DEFAULT_VIEWPORT_WIDTH,
                DEFAULT_VIEWPORT_HEIGHT
            );
            return Self::default();
        }
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Immutable engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub viewport: Viewport,
    /// Fixed physics rate in ticks per second.
    pub physics_hz: f32,
    /// Target rate for published render snapshots. Kept below the physics
    /// rate; physics fidelity is never throttled.
    pub render_fps: f32,
    /// Probability mass of the classic shape in the random draw; the rest
    /// is spread uniformly over the other drawable shapes.
    pub classic_weight: f32,
    /// Seed for the engine RNG. None draws entropy from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            physics_hz: 60.0,
            render_fps: 30.0,
            classic_weight: 0.6,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Length of one physics tick in seconds.
    pub fn tick_secs(&self) -> f32 {
        1.0 / self.physics_hz.max(1.0)
    }

    /// Minimum interval between published render snapshots.
    pub fn render_interval_secs(&self) -> f32 {
        1.0 / self.render_fps.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_viewport_falls_back_to_defaults() {
        let v = Viewport::new(0.0, 480.0);
        assert_eq!(v, Viewport::default());
        let v = Viewport::new(f32::NAN, 480.0);
        assert_eq!(v, Viewport::default());
    }

    #[test]
    fn test_valid_viewport_is_kept() {
        let v = Viewport::new(1024.0, 768.0);
        assert_eq!(v.width, 1024.0);
        assert_eq!(v.height, 768.0);
    }

    #[test]
    fn test_config_default_rates() {
        let config = EngineConfig::default();
        assert_eq!(config.physics_hz, 60.0);
        assert_eq!(config.render_fps, 30.0);
        assert!(config.render_fps < config.physics_hz);
        assert!((config.tick_secs() - 1.0 / 60.0).abs() < 1e-7);
    }
}
