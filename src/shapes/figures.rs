//! Parametric outline shapes: heart, star, clover, diamond and hexagon.
//!
//! Every family carries a normalization constant correcting for its mean
//! radius, so bursts read as the same size across shapes at equal speed.

use super::{Shape, ShapeType, Vec2};
use std::f32::consts::TAU;

/// Mean radius of the raw heart curve (peaks at 17 near the bottom tip).
const HEART_NORM: f32 = 12.0;
/// Mean of the alternating star radii (1.0 and 0.5).
const STAR_NORM: f32 = 0.75;
/// Mean radius of the clover modulation below.
const CLOVER_NORM: f32 = 0.6;
/// Mean radius of an L1-normalized unit circle.
const DIAMOND_NORM: f32 = 0.83;

/// Classic parametric heart outline.
pub struct HeartShape;

impl Shape for HeartShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Heart
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let t = TAU * index as f32 / count.max(1) as f32;
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        let scale = speed / HEART_NORM;
        // curve y is up-positive, screen y is down-positive
        Vec2::new(x * scale, -y * scale)
    }
}

/// Five-point star: long and short radii alternate at a fixed angular step.
pub struct StarShape;

impl Shape for StarShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Star
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let count = count.max(1);
        let angle = TAU * index as f32 / count as f32;
        // ten alternating segments make five spikes
        let segment = index * 10 / count;
        let radius = if segment % 2 == 0 { 1.0 } else { 0.5 };
        let scale = speed * radius / STAR_NORM;
        Vec2::new(angle.cos() * scale, angle.sin() * scale)
    }
}

/// Three-lobed outline: r = base + amplitude * sin(3t).
pub struct CloverShape;

impl Shape for CloverShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Clover
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let t = TAU * index as f32 / count.max(1) as f32;
        let radius = 0.6 + 0.4 * (3.0 * t).sin();
        let scale = speed * radius / CLOVER_NORM;
        Vec2::new(t.cos() * scale, t.sin() * scale)
    }
}

/// Unit circle direction normalized by its L1 norm, tracing a diamond.
pub struct DiamondShape;

impl Shape for DiamondShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Diamond
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let t = TAU * index as f32 / count.max(1) as f32;
        let (x, y) = (t.cos(), t.sin());
        let l1 = x.abs() + y.abs();
        let scale = speed / (l1 * DIAMOND_NORM);
        Vec2::new(x * scale, y * scale)
    }
}

/// Angles quantized to six discrete ray directions.
pub struct HexagonShape;

impl Shape for HexagonShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Hexagon
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let t = TAU * index as f32 / count.max(1) as f32;
        let sector = TAU / 6.0;
        let angle = (t / sector).round() * sector;
        // stagger particles along each ray so the rays read as lines
        let reach = 0.4 + 0.6 * ((index % 8) as f32 / 7.0);
        let scale = speed * reach;
        Vec2::new(angle.cos() * scale, angle.sin() * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep(shape: &dyn Shape, count: usize, speed: f32) -> Vec<Vec2> {
        let mut rng = fastrand::Rng::with_seed(9);
        (0..count)
            .map(|i| shape.velocity_for(i, count, speed, &mut rng))
            .collect()
    }

    #[test]
    fn test_heart_is_finite_and_banded() {
        for v in sweep(&HeartShape, 90, 2.0) {
            assert!(v.x.is_finite() && v.y.is_finite());
            assert!(v.length() <= 2.0 * 1.6);
        }
    }

    #[test]
    fn test_star_alternates_radii() {
        let velocities = sweep(&StarShape, 100, 1.5);
        let lengths: Vec<f32> = velocities.iter().map(|v| v.length()).collect();
        let max = lengths.iter().cloned().fold(0.0f32, f32::max);
        let min = lengths.iter().cloned().fold(f32::INFINITY, f32::min);
        assert!(max > min * 1.5, "spikes should stand out from the valleys");
    }

    #[test]
    fn test_diamond_traces_constant_l1_radius() {
        for v in sweep(&DiamondShape, 64, 2.0) {
            let l1 = v.x.abs() + v.y.abs();
            assert!((l1 - 2.0 / DIAMOND_NORM).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hexagon_uses_six_directions() {
        let mut angles: Vec<i32> = sweep(&HexagonShape, 96, 2.0)
            .iter()
            .map(|v| (v.y.atan2(v.x).to_degrees().rem_euclid(360.0) / 60.0).round() as i32 % 6)
            .collect();
        angles.sort_unstable();
        angles.dedup();
        assert_eq!(angles.len(), 6);
    }
}
