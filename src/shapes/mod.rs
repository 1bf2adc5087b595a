//! Burst shape system.
//!
//! Each shape family turns a particle index into an initial velocity (or,
//! for the glyph shape, an initial placement) so that the burst traces a
//! recognizable silhouette:
//! - Classic: uniform random burst (the default "peony")
//! - Circle / Kamuro: evenly spaced ring, kamuro with a damped radius
//! - Heart / Star / Clover / Diamond / Hexagon: parametric outlines
//! - Glyph: particles laid along a character skeleton instead of a field

mod figures;
mod glyph;
mod radial;
mod registry;

pub use figures::{CloverShape, DiamondShape, HeartShape, HexagonShape, StarShape};
pub use glyph::GlyphShape;
pub use radial::{CircleShape, ClassicShape, KamuroShape};
pub use registry::{create_shape, shape_profile};

use serde::{Deserialize, Serialize};

/// 2D vector in viewport pixels. Positive y points down, matching screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale the vector down so its length does not exceed `max`.
    pub fn clamp_length(self, max: f32) -> Self {
        let len = self.length();
        if len > max && len > 0.0 {
            let k = max / len;
            Self::new(self.x * k, self.y * k)
        } else {
            self
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// One particle of a freshly seeded burst.
#[derive(Debug, Clone, Copy)]
pub struct BurstSeed {
    /// Offset from the burst point at explosion time. Zero for
    /// velocity-driven shapes.
    pub offset: Vec2,
    /// Initial velocity in pixels per physics tick.
    pub velocity: Vec2,
    /// Random phase for the melt perturbation. Only set by shapes that
    /// drift instead of radiating.
    pub drift_phase: Option<f32>,
}

/// Available burst silhouettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeType {
    Classic,
    Circle,
    Kamuro,
    Heart,
    Star,
    Clover,
    Diamond,
    Hexagon,
    Glyph,
}

impl ShapeType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "peony" => Some(Self::Classic),
            "circle" | "ring" => Some(Self::Circle),
            "kamuro" | "willow" => Some(Self::Kamuro),
            "heart" => Some(Self::Heart),
            "star" => Some(Self::Star),
            "clover" => Some(Self::Clover),
            "diamond" => Some(Self::Diamond),
            "hexagon" | "hex" => Some(Self::Hexagon),
            "glyph" | "text" => Some(Self::Glyph),
            _ => None,
        }
    }

    /// Parse a shape identifier, degrading unknown names to the plain
    /// circle burst instead of failing.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Circle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Circle => "circle",
            Self::Kamuro => "kamuro",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Clover => "clover",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
            Self::Glyph => "glyph",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Uniform random burst",
            Self::Circle => "Evenly spaced ring",
            Self::Kamuro => "Damped ring that droops into a willow",
            Self::Heart => "Parametric heart outline",
            Self::Star => "Five-point spike pattern",
            Self::Clover => "Three-lobed outline",
            Self::Diamond => "L1-normalized circle",
            Self::Hexagon => "Six discrete ray directions",
            Self::Glyph => "Particles laid along a character skeleton",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Classic,
            Self::Circle,
            Self::Kamuro,
            Self::Heart,
            Self::Star,
            Self::Clover,
            Self::Diamond,
            Self::Hexagon,
            Self::Glyph,
        ]
    }

    /// Shapes eligible for the weighted random draw. The glyph shape is
    /// only reachable through the reserved message token.
    pub fn drawable() -> &'static [Self] {
        &[
            Self::Classic,
            Self::Circle,
            Self::Kamuro,
            Self::Heart,
            Self::Star,
            Self::Clover,
            Self::Diamond,
            Self::Hexagon,
        ]
    }
}

/// Glyph layout constants: how many parallel offset rows give the stroke
/// its thickness, and how far apart they sit.
#[derive(Debug, Clone, Copy)]
pub struct GlyphLayout {
    pub rows: usize,
    pub row_spacing: f32,
}

/// Static physics and layout constants for one shape family.
///
/// Invariant: `count` is strictly positive and `gravity` is non-negative
/// for every registered profile.
#[derive(Debug, Clone, Copy)]
pub struct ShapeProfile {
    /// Particles seeded at explosion time.
    pub count: usize,
    /// Vertical acceleration in pixels per tick squared.
    pub gravity: f32,
    /// Per-tick velocity damping factor, in (0, 1).
    pub friction: f32,
    /// Burst radius scale relative to the classic shape.
    pub expand: f32,
    /// Bounded trail history length per particle.
    pub trail_capacity: usize,
    /// Present only for glyph-style shapes.
    pub glyph: Option<GlyphLayout>,
}

/// Trait for burst shapes.
pub trait Shape: Send + Sync {
    /// Shape identifier.
    fn shape_type(&self) -> ShapeType;

    /// Initial velocity for particle `index` out of `count`, where `speed`
    /// is the burst scale in pixels per physics tick. Deterministic given
    /// its inputs except where the family explicitly samples randomness.
    fn velocity_for(&self, index: usize, count: usize, speed: f32, rng: &mut fastrand::Rng)
        -> Vec2;

    /// Seed a whole burst. The default builds zero-offset seeds from
    /// `velocity_for`; placement-driven shapes override this.
    fn seed_burst(&self, count: usize, speed: f32, rng: &mut fastrand::Rng) -> Vec<BurstSeed> {
        (0..count)
            .map(|i| BurstSeed {
                offset: Vec2::ZERO,
                velocity: self.velocity_for(i, count, speed, rng),
                drift_phase: None,
            })
            .collect()
    }
}
