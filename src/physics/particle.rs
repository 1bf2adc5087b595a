//! Particle state and bounded trail history.

use crate::shapes::{BurstSeed, Vec2};
use serde::Serialize;
use std::collections::VecDeque;

/// One past position of a particle, kept for the fading tail effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// A single burst particle. Owned exclusively by one firework instance.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life, 1 at birth down to 0. Opacity tracks it.
    pub life: f32,
    pub opacity: f32,
    pub size: f32,
    pub color: [f32; 3],
    /// Phase for the melt perturbation; None for rigid shapes.
    pub drift_phase: Option<f32>,
    /// Ticks lived so far, drives the perturbation frequency.
    pub age_ticks: u32,
    trail: VecDeque<TrailPoint>,
    trail_capacity: usize,
}

impl Particle {
    pub fn from_seed(
        origin: Vec2,
        seed: &BurstSeed,
        size: f32,
        color: [f32; 3],
        trail_capacity: usize,
    ) -> Self {
        Self {
            pos: origin + seed.offset,
            vel: seed.velocity,
            life: 1.0,
            opacity: 1.0,
            size,
            color,
            drift_phase: seed.drift_phase,
            age_ticks: 0,
            trail: VecDeque::with_capacity(trail_capacity),
            trail_capacity,
        }
    }

    /// Record the current position, evicting the oldest entry beyond
    /// capacity.
    pub fn push_trail(&mut self) {
        if self.trail_capacity == 0 {
            return;
        }
        if self.trail.len() == self.trail_capacity {
            self.trail.pop_front();
        }
        self.trail.push_back(TrailPoint {
            x: self.pos.x,
            y: self.pos.y,
            opacity: self.opacity,
        });
    }

    pub fn trail(&self) -> impl Iterator<Item = &TrailPoint> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
