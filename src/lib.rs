//! HanabiTalk Engine
//!
//! Particle-physics firework animation engine for the HanabiTalk chat
//! client: every sent message launches a rocket whose burst shape, size,
//! duration and speed are derived from the message content, with the
//! message text falling and fading at the burst point.
//!
//! # Features
//!
//! - Shape system: classic, circle, kamuro, heart, star, clover, diamond,
//!   hexagon bursts plus a text-glyph shape placed along a character
//!   skeleton
//! - Fixed-step particle simulation decoupled from the display refresh
//!   rate through a time accumulator
//! - Launch-phase projectile with inverse-kinematics initial velocity
//! - Closed-form caption motion matching the discrete particle physics
//! - Host-agnostic: the engine exposes `tick(dt)` and render snapshots;
//!   any scheduler (render callback, headless timer, test harness) can
//!   drive it
//!
//! # Example
//!
//! ```
//! use hanabitalk_engine::{EngineConfig, MessageEvent, Stage};
//!
//! let mut stage = Stage::new(EngineConfig {
//!     rng_seed: Some(7),
//!     ..EngineConfig::default()
//! });
//! let id = stage.spawn(&MessageEvent::new("hello hanabi", "#ff69b4")).unwrap();
//! stage.tick_all(1.0 / 60.0);
//! assert!(stage.contains(id));
//! ```

pub mod config;
pub mod engine;
pub mod message;
pub mod physics;
pub mod shapes;

// Re-export commonly used types
pub use config::{EngineConfig, Viewport};
pub use engine::{
    CaptionFrame, CaptionTimeline, Firework, FireworkId, FireworkParams, Phase, RenderSnapshot,
    SpawnError, Stage,
};
pub use message::{derive_params, parse_hex_color, quantize_size, MessageEvent};
pub use physics::{decay_per_tick, step, Particle, Rocket, TrailPoint};
pub use shapes::{create_shape, shape_profile, BurstSeed, Shape, ShapeProfile, ShapeType, Vec2};
