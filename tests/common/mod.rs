//! Shared test fixtures.

use hanabitalk_engine::{EngineConfig, MessageEvent, Stage, Viewport};

/// Stage with a fixed seed and an 800x600 viewport.
pub fn seeded_stage() -> Stage {
    Stage::new(seeded_config())
}

pub fn seeded_config() -> EngineConfig {
    EngineConfig {
        viewport: Viewport::new(800.0, 600.0),
        rng_seed: Some(424_242),
        ..EngineConfig::default()
    }
}

pub fn message(text: &str) -> MessageEvent {
    MessageEvent::new(text, "#00ff88")
}

/// Drive the stage for `secs` of synthetic wall time at 60 calls/second.
pub fn run_for(stage: &mut Stage, secs: f32) {
    let calls = (secs * 60.0).ceil() as usize;
    for _ in 0..calls {
        stage.tick_all(1.0 / 60.0);
    }
}
