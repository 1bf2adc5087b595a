//! Text-glyph shape: particles placed along a character skeleton.
//!
//! Unlike the radial families this shape is placement-driven. Particles
//! start almost at rest on a piecewise-linear skeleton spelling the
//! character, with parallel offset rows giving the stroke thickness, and
//! then melt downward under the simulator's drift perturbation.

use super::{BurstSeed, GlyphLayout, Shape, ShapeType, Vec2};
use std::f32::consts::TAU;

/// Skeleton control points for "w" in a unit box, y down.
const SKELETON: [Vec2; 5] = [
    Vec2 { x: -1.0, y: -0.9 },
    Vec2 { x: -0.5, y: 0.9 },
    Vec2 { x: 0.0, y: -0.2 },
    Vec2 { x: 0.5, y: 0.9 },
    Vec2 { x: 1.0, y: -0.9 },
];

/// Spatial extent multiplier: where a radiating particle at `speed` covers
/// roughly speed/(1-friction) pixels over its life, the glyph gets its
/// full extent at placement time.
const GLYPH_EXTENT: f32 = 16.0;

/// Small downward bias so the fall starts promptly.
const FALL_BIAS: f32 = 0.12;

pub struct GlyphShape {
    layout: GlyphLayout,
}

impl GlyphShape {
    pub fn new(layout: GlyphLayout) -> Self {
        Self { layout }
    }

    /// Point at arc-length fraction `t` (0..=1) along the skeleton.
    fn point_at(t: f32) -> Vec2 {
        let segments = SKELETON.len() - 1;
        let lengths: Vec<f32> = (0..segments)
            .map(|i| {
                let a = SKELETON[i];
                let b = SKELETON[i + 1];
                Vec2::new(b.x - a.x, b.y - a.y).length()
            })
            .collect();
        let total: f32 = lengths.iter().sum();
        let mut remaining = t.clamp(0.0, 1.0) * total;
        for (i, &len) in lengths.iter().enumerate() {
            if remaining <= len || i == segments - 1 {
                let k = if len > 0.0 { (remaining / len).min(1.0) } else { 0.0 };
                let a = SKELETON[i];
                let b = SKELETON[i + 1];
                return Vec2::new(a.x + (b.x - a.x) * k, a.y + (b.y - a.y) * k);
            }
            remaining -= len;
        }
        SKELETON[segments]
    }
}

impl Shape for GlyphShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Glyph
    }

    fn velocity_for(
        &self,
        _index: usize,
        _count: usize,
        _speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        Vec2::new(0.0, FALL_BIAS)
    }

    fn seed_burst(&self, count: usize, speed: f32, rng: &mut fastrand::Rng) -> Vec<BurstSeed> {
        let rows = self.layout.rows.max(1);
        let per_row = (count / rows).max(1);
        let scale = speed * GLYPH_EXTENT;
        let mut seeds = Vec::with_capacity(per_row * rows);

        for row in 0..rows {
            let row_offset = (row as f32 - (rows as f32 - 1.0) * 0.5) * self.layout.row_spacing;
            for i in 0..per_row {
                let t = if per_row > 1 {
                    i as f32 / (per_row - 1) as f32
                } else {
                    0.5
                };
                let p = Self::point_at(t);
                seeds.push(BurstSeed {
                    offset: Vec2::new(p.x * scale, p.y * scale + row_offset),
                    velocity: Vec2::new(0.0, FALL_BIAS),
                    drift_phase: Some(rng.f32() * TAU),
                });
            }
        }
        seeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_shape() -> GlyphShape {
        GlyphShape::new(GlyphLayout {
            rows: 3,
            row_spacing: 3.0,
        })
    }

    #[test]
    fn test_seeds_cover_the_skeleton_span() {
        let mut rng = fastrand::Rng::with_seed(11);
        let seeds = test_shape().seed_burst(120, 2.0, &mut rng);
        assert!(!seeds.is_empty());

        let min_x = seeds.iter().map(|s| s.offset.x).fold(f32::INFINITY, f32::min);
        let max_x = seeds.iter().map(|s| s.offset.x).fold(f32::NEG_INFINITY, f32::max);
        let extent = 2.0 * GLYPH_EXTENT;
        assert!((min_x + extent).abs() < 1.0);
        assert!((max_x - extent).abs() < 1.0);
    }

    #[test]
    fn test_seeds_start_nearly_at_rest() {
        let mut rng = fastrand::Rng::with_seed(11);
        for seed in test_shape().seed_burst(90, 2.0, &mut rng) {
            assert_eq!(seed.velocity.x, 0.0);
            assert!(seed.velocity.y > 0.0 && seed.velocity.y < 0.5);
            assert!(seed.drift_phase.is_some());
        }
    }

    #[test]
    fn test_rows_offset_vertically() {
        let mut rng = fastrand::Rng::with_seed(11);
        let seeds = test_shape().seed_burst(90, 2.0, &mut rng);
        let per_row = seeds.len() / 3;
        // same skeleton point, adjacent rows
        let a = seeds[0].offset;
        let b = seeds[per_row].offset;
        assert_eq!(a.x, b.x);
        assert!((b.y - a.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_at_endpoints() {
        let start = GlyphShape::point_at(0.0);
        let end = GlyphShape::point_at(1.0);
        assert_eq!(start, SKELETON[0]);
        assert_eq!(end, SKELETON[4]);
    }
}
