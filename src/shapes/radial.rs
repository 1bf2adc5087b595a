//! Radial burst shapes: classic, circle and kamuro.

use super::{Shape, ShapeType, Vec2};
use std::f32::consts::TAU;

/// Kamuro bursts are launched slower so the long-friction droop stays
/// inside the frame.
const KAMURO_DAMP: f32 = 0.82;

/// Uniform random burst. Angle and radius are sampled fresh on every call,
/// which is what gives the classic peony its ragged edge.
pub struct ClassicShape;

impl Shape for ClassicShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Classic
    }

    fn velocity_for(
        &self,
        _index: usize,
        _count: usize,
        speed: f32,
        rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let angle = rng.f32() * TAU;
        // sqrt keeps the area density uniform instead of clumping at the center
        let radius = speed * rng.f32().sqrt();
        Vec2::new(angle.cos() * radius, angle.sin() * radius)
    }
}

/// Evenly spaced ring at constant radius.
pub struct CircleShape;

impl Shape for CircleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let angle = TAU * index as f32 / count.max(1) as f32;
        Vec2::new(angle.cos() * speed, angle.sin() * speed)
    }
}

/// Ring with a damped radius; combined with its low-friction profile the
/// burst shrinks and droops like a willow.
pub struct KamuroShape;

impl Shape for KamuroShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Kamuro
    }

    fn velocity_for(
        &self,
        index: usize,
        count: usize,
        speed: f32,
        _rng: &mut fastrand::Rng,
    ) -> Vec2 {
        let angle = TAU * index as f32 / count.max(1) as f32;
        let radius = speed * KAMURO_DAMP;
        Vec2::new(angle.cos() * radius, angle.sin() * radius)
    }
}
