//! Fixed-step particle integration.

use super::Particle;
use crate::shapes::ShapeProfile;

/// Nominal physics rate. The engine may be configured differently; decay
/// is always expressed per tick so lifetimes stay rate-independent.
pub const NOMINAL_PHYSICS_HZ: f32 = 60.0;

/// Melt perturbation for glyph particles: amplitude ramps up as life
/// drains, frequency/phase come from the per-particle seed.
const MELT_AMP: f32 = 0.04;
const MELT_FREQ: f32 = 0.11;
/// Velocity clamp that keeps the glyph from smearing.
const MELT_MAX_SPEED: f32 = 0.9;

/// Per-tick life decrement so total lifetime matches the configured
/// duration at the given physics rate.
pub fn decay_per_tick(duration_secs: f32, physics_hz: f32) -> f32 {
    1.0 / (duration_secs.max(0.1) * physics_hz.max(1.0))
}

/// Advance all particles by one fixed physics tick, dropping the dead.
///
/// Per particle, in order: trail push, drift perturbation (glyph only),
/// position integration, velocity damping, gravity, life decay, opacity
/// update, removal at life <= 0. Returns the surviving count; zero means
/// the burst is over.
pub fn step(particles: &mut Vec<Particle>, profile: &ShapeProfile, decay: f32) -> usize {
    particles.retain_mut(|p| {
        p.push_trail();

        if let Some(phase) = p.drift_phase {
            let ramp = MELT_AMP * (1.0 - p.life.max(0.0));
            let t = p.age_ticks as f32 * MELT_FREQ;
            p.vel.x += ramp * (phase + t).sin();
            p.vel.y += ramp * 0.5 * (phase * 1.7 + t).cos();
            p.vel = p.vel.clamp_length(MELT_MAX_SPEED);
        }

        p.pos.x += p.vel.x;
        p.pos.y += p.vel.y;
        p.vel.x *= profile.friction;
        p.vel.y *= profile.friction;
        p.vel.y += profile.gravity;

        p.age_ticks += 1;
        p.life -= decay;
        p.opacity = p.life.max(0.0);
        p.life > 0.0
    });
    particles.len()
}
