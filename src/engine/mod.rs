//! Firework lifecycle state machine.
//!
//! One [`Firework`] owns everything mutable about a single shell: the
//! launch-phase rocket, the particle set, the fixed-step accumulator and
//! the throttled render snapshot. It has no clock and no scheduler of its
//! own; the host (a render-loop callback, a headless timer, or a test
//! harness with synthetic time) calls [`Firework::tick`] with wall-clock
//! deltas and reads snapshots back.

mod caption;
mod stage;

pub use caption::{CaptionFrame, CaptionTimeline};
pub use stage::{FireworkId, SpawnError, Stage};

use crate::config::EngineConfig;
use crate::physics::{self, Particle, Rocket, TrailPoint};
use crate::shapes::{create_shape, shape_profile, Shape, ShapeProfile, ShapeType, Vec2};
use serde::Serialize;

/// Base burst speed in pixels per tick for a size-1 shell.
const BASE_BURST_SPEED: f32 = 2.2;

/// Lifecycle phase. The finished state is implicit: the instance reports
/// completion and is removed by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Launch,
    Explode,
}

/// Notification callback, fired at most once.
pub type Callback = Box<dyn FnMut()>;

/// Everything derived from one chat message.
#[derive(Debug, Clone)]
pub struct FireworkParams {
    pub shape: ShapeType,
    pub color: [f32; 3],
    /// Quantized burst size multiplier.
    pub size: f32,
    pub duration_secs: f32,
    pub launch_speed: f32,
    pub origin_x: f32,
    pub target: Vec2,
    /// Message text shown at the burst point.
    pub caption: String,
}

/// Render-visible copy of one particle.
#[derive(Debug, Clone, Serialize)]
pub struct ParticleSnapshot {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub size: f32,
    pub trail: Vec<TrailPoint>,
}

/// Render-visible copy of the ascending rocket and its tail.
#[derive(Debug, Clone, Serialize)]
pub struct RocketSnapshot {
    pub x: f32,
    pub y: f32,
    pub tail: Vec<TrailPoint>,
}

/// Published render state. Updated at the throttled render rate, never at
/// the physics rate.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub phase: Phase,
    pub color: [f32; 3],
    pub rocket: Option<RocketSnapshot>,
    pub particles: Vec<ParticleSnapshot>,
    pub caption: Option<CaptionFrame>,
}

pub struct Firework {
    params: FireworkParams,
    profile: ShapeProfile,
    shape: Box<dyn Shape>,
    rng: fastrand::Rng,

    phase: Phase,
    rocket: Option<Rocket>,
    particles: Vec<Particle>,
    decay: f32,
    exploded_ms: f32,
    caption: Option<CaptionTimeline>,

    tick_secs: f32,
    accumulator: f32,
    render_interval: f32,
    since_render: f32,
    snapshot: RenderSnapshot,

    on_explode: Option<Callback>,
    on_end: Option<Callback>,
    finished: bool,
}

impl Firework {
    pub fn new(params: FireworkParams, config: &EngineConfig, rng: fastrand::Rng) -> Self {
        let profile = shape_profile(params.shape);
        let shape = create_shape(params.shape);
        let rocket = Rocket::new(
            params.origin_x,
            config.viewport.height,
            params.target.y,
            params.size,
            params.launch_speed,
        );
        let decay = physics::decay_per_tick(params.duration_secs, config.physics_hz);

        let mut firework = Self {
            snapshot: RenderSnapshot {
                phase: Phase::Launch,
                color: params.color,
                rocket: None,
                particles: Vec::new(),
                caption: None,
            },
            params,
            profile,
            shape,
            rng,
            phase: Phase::Launch,
            rocket: Some(rocket),
            particles: Vec::new(),
            decay,
            exploded_ms: 0.0,
            caption: None,
            tick_secs: config.tick_secs(),
            accumulator: 0.0,
            render_interval: config.render_interval_secs(),
            since_render: 0.0,
            on_explode: None,
            on_end: None,
            finished: false,
        };
        firework.publish_snapshot();
        firework
    }

    /// Register the explosion notification. Fires exactly once, when the
    /// burst begins and before the first explode-phase snapshot.
    pub fn set_on_explode(&mut self, callback: Callback) {
        self.on_explode = Some(callback);
    }

    /// Register the completion notification. Fires exactly once, when the
    /// last particle expires.
    pub fn set_on_end(&mut self, callback: Callback) {
        self.on_end = Some(callback);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn params(&self) -> &FireworkParams {
        &self.params
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// The last published render state.
    pub fn snapshot(&self) -> &RenderSnapshot {
        &self.snapshot
    }

    /// Caption pose for the current moment, None before the explosion.
    pub fn caption_frame(&self) -> Option<CaptionFrame> {
        self.caption.as_ref().map(|c| c.sample(self.exploded_ms))
    }

    /// Advance by a wall-clock delta in seconds.
    ///
    /// Physics runs in fixed ticks through an accumulator: the delta is
    /// banked, whole ticks are consumed in order, and the remainder
    /// carries over, so simulation results do not depend on the display
    /// refresh rate. Snapshots are only re-published when a render
    /// interval has elapsed. Returns true once the firework is finished.
    pub fn tick(&mut self, dt_secs: f32) -> bool {
        if self.finished {
            return true;
        }

        self.accumulator += dt_secs.max(0.0);
        while self.accumulator >= self.tick_secs {
            self.accumulator -= self.tick_secs;
            self.step_once();
            if self.finished {
                break;
            }
        }

        self.since_render += dt_secs.max(0.0);
        if self.since_render >= self.render_interval || self.finished {
            self.since_render %= self.render_interval.max(f32::MIN_POSITIVE);
            self.publish_snapshot();
        }
        self.finished
    }

    fn step_once(&mut self) {
        match self.phase {
            Phase::Launch => {
                let reached = match self.rocket.as_mut() {
                    Some(rocket) => rocket.step(),
                    None => true,
                };
                if reached {
                    self.explode();
                }
            }
            Phase::Explode => {
                self.exploded_ms += self.tick_secs * 1000.0;
                if physics::step(&mut self.particles, &self.profile, self.decay) == 0 {
                    self.finished = true;
                    if let Some(mut callback) = self.on_end.take() {
                        callback();
                    }
                }
            }
        }
    }

    /// Launch -> Explode transition: seed the particle set at the rocket's
    /// final position and fire the explosion notification.
    fn explode(&mut self) {
        let rocket = self.rocket.take();
        let origin = rocket
            .map(|r| Vec2::new(r.x, r.y.max(0.0)))
            .unwrap_or(self.params.target);

        let speed = BASE_BURST_SPEED * self.params.size * self.profile.expand;
        let seeds = self
            .shape
            .seed_burst(self.profile.count, speed, &mut self.rng);
        self.particles = seeds
            .iter()
            .map(|seed| {
                Particle::from_seed(
                    origin,
                    seed,
                    self.params.size,
                    self.params.color,
                    self.profile.trail_capacity,
                )
            })
            .collect();

        self.phase = Phase::Explode;
        self.exploded_ms = 0.0;
        self.caption = Some(CaptionTimeline::new(
            self.params.duration_secs,
            &self.profile,
            1.0 / self.tick_secs,
        ));

        if let Some(mut callback) = self.on_explode.take() {
            callback();
        }
    }

    fn publish_snapshot(&mut self) {
        self.snapshot = RenderSnapshot {
            phase: self.phase,
            color: self.params.color,
            rocket: self.rocket.as_ref().map(|r| RocketSnapshot {
                x: r.x,
                y: r.y,
                tail: r.tail(),
            }),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleSnapshot {
                    x: p.pos.x,
                    y: p.pos.y,
                    opacity: p.opacity,
                    size: p.size,
                    trail: p.trail().copied().collect(),
                })
                .collect(),
            caption: self.caption_frame(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn params(shape: ShapeType, duration_secs: f32) -> FireworkParams {
        FireworkParams {
            shape,
            color: [1.0, 0.5, 0.2],
            size: 1.0,
            duration_secs,
            launch_speed: 1.0,
            origin_x: 400.0,
            target: Vec2::new(400.0, 300.0),
            caption: "hello".to_string(),
        }
    }

    fn firework(shape: ShapeType, duration_secs: f32) -> Firework {
        Firework::new(
            params(shape, duration_secs),
            &EngineConfig::default(),
            fastrand::Rng::with_seed(21),
        )
    }

    #[test]
    fn test_full_lifecycle_fires_each_callback_once() {
        let mut fw = firework(ShapeType::Classic, 3.0);
        let explosions = Rc::new(Cell::new(0));
        let ends = Rc::new(Cell::new(0));
        let (e, n) = (explosions.clone(), ends.clone());
        fw.set_on_explode(Box::new(move || e.set(e.get() + 1)));
        fw.set_on_end(Box::new(move || n.set(n.get() + 1)));

        let mut guard = 0;
        while !fw.tick(1.0 / 60.0) {
            guard += 1;
            assert!(guard < 10_000, "lifecycle never completed");
        }
        assert_eq!(explosions.get(), 1);
        assert_eq!(ends.get(), 1);
        assert!(fw.is_finished());
        // ticking a finished instance is inert
        assert!(fw.tick(1.0 / 60.0));
        assert_eq!(ends.get(), 1);
    }

    #[test]
    fn test_explosion_precedes_first_explode_snapshot() {
        let mut fw = firework(ShapeType::Circle, 3.0);
        let exploded = Rc::new(Cell::new(false));
        let flag = exploded.clone();
        fw.set_on_explode(Box::new(move || flag.set(true)));

        loop {
            fw.tick(1.0 / 60.0);
            if fw.snapshot().phase == Phase::Explode {
                assert!(exploded.get(), "snapshot published before the callback");
                assert!(!fw.snapshot().particles.is_empty());
                break;
            }
        }
    }

    #[test]
    fn test_accumulator_handles_odd_deltas() {
        // same total wall time, wildly different delta sizes
        let mut fine = firework(ShapeType::Circle, 3.0);
        let mut coarse = firework(ShapeType::Circle, 3.0);
        for _ in 0..600 {
            fine.tick(1.0 / 240.0);
        }
        for _ in 0..10 {
            coarse.tick(0.25);
        }
        assert_eq!(fine.phase(), coarse.phase());
    }

    #[test]
    fn test_opacity_strictly_decreases_after_burst() {
        let mut fw = firework(ShapeType::Heart, 3.0);
        while fw.phase() == Phase::Launch {
            fw.tick(1.0 / 60.0);
        }
        // ticking by the render interval republishes every call, with at
        // least one physics tick in between
        let mut last = f32::INFINITY;
        while !fw.is_finished() {
            fw.tick(1.0 / 30.0);
            if let Some(p) = fw.snapshot().particles.first() {
                assert!(p.opacity < last);
                last = p.opacity;
            }
        }
        assert_eq!(fw.particle_count(), 0);
    }

    #[test]
    fn test_caption_absent_until_explosion() {
        let mut fw = firework(ShapeType::Classic, 4.0);
        assert!(fw.caption_frame().is_none());
        while fw.phase() == Phase::Launch {
            fw.tick(1.0 / 60.0);
        }
        let frame = fw.caption_frame().expect("caption after burst");
        assert!(frame.opacity > 0.9);
        assert!(frame.scale >= 1.0);
    }

    #[test]
    fn test_render_snapshot_is_throttled_but_physics_is_not() {
        let mut config = EngineConfig::default();
        config.render_fps = 1.0;
        let mut fw = Firework::new(
            params(ShapeType::Classic, 3.0),
            &config,
            fastrand::Rng::with_seed(21),
        );
        while fw.phase() == Phase::Launch {
            fw.tick(1.0 / 60.0);
        }
        // capture `before` right after a republish so `since_render` is a
        // small remainder, not an arbitrary point in the render interval
        while fw.snapshot().phase != Phase::Explode {
            fw.tick(1.0 / 60.0);
        }

        let before = serde_json::to_string(fw.snapshot()).unwrap();
        let age_before = fw.particle_count();
        for _ in 0..10 {
            fw.tick(1.0 / 60.0);
        }
        // physics advanced, the published snapshot did not
        assert_eq!(before, serde_json::to_string(fw.snapshot()).unwrap());
        assert_eq!(fw.particle_count(), age_before);

        // a full render interval later the snapshot catches up
        fw.tick(1.0);
        assert_ne!(before, serde_json::to_string(fw.snapshot()).unwrap());
    }
}
