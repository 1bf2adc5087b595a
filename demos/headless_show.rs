//! Example: run a short firework show headlessly.
//!
//! Spawns a few chat messages, drives the engine with synthetic time and
//! prints what a browser host would render.
//!
//! Run with:
//!     cargo run --example headless_show

use anyhow::Result;
use hanabitalk_engine::{EngineConfig, MessageEvent, Phase, Stage, Viewport};

fn main() -> Result<()> {
    env_logger::init();

    println!("HanabiTalk Engine - Headless Show");
    println!("=================================\n");

    let config = EngineConfig {
        viewport: Viewport::new(1280.0, 720.0),
        rng_seed: Some(2024),
        ..EngineConfig::default()
    };
    println!("Viewport: {}x{}", config.viewport.width, config.viewport.height);
    println!(
        "Physics: {} Hz, render throttle: {} fps\n",
        config.physics_hz, config.render_fps
    );

    let mut stage = Stage::new(config);

    let messages = [
        ("hi", "#ff69b4"),
        ("w", "#ffd700"),
        ("what a beautiful night for fireworks!", "#00ff88"),
    ];
    for (text, color) in messages {
        let id = stage.spawn(&MessageEvent::new(text, color))?;
        let params = stage.get(id).expect("just spawned").params();
        println!(
            "spawned {:?}: shape {}, size {:.2}, duration {:.1}s, target ({:.0}, {:.0})",
            text,
            params.shape.name(),
            params.size,
            params.duration_secs,
            params.target.x,
            params.target.y
        );
    }

    println!("\nRunning at 60 synthetic frames per second...\n");
    let mut frame = 0u32;
    while !stage.is_empty() {
        stage.tick_all(1.0 / 60.0);
        frame += 1;

        // narrate once a second
        if frame % 60 == 0 {
            let snapshots = stage.snapshots();
            let live_particles: usize =
                snapshots.iter().map(|(_, s)| s.particles.len()).sum();
            let launching = snapshots
                .iter()
                .filter(|(_, s)| s.phase == Phase::Launch)
                .count();
            println!(
                "t={:>2}s  instances={} launching={} particles={}",
                frame / 60,
                snapshots.len(),
                launching,
                live_particles
            );
        }
    }

    println!("\nAll fireworks expired after {} frames.", frame);

    // what a browser host would receive for one frame
    let mut stage = Stage::new(EngineConfig {
        rng_seed: Some(7),
        ..EngineConfig::default()
    });
    stage.spawn(&MessageEvent::new("encore", "#ff4500"))?;
    stage.tick_all(0.5);
    if let Some((id, snapshot)) = stage.snapshots().first() {
        println!("\nSample snapshot for {:?}:", id);
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    }

    Ok(())
}
