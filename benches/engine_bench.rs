//! Benchmarks for the particle simulator and shape seeding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hanabitalk_engine::physics::{decay_per_tick, step, Particle};
use hanabitalk_engine::shapes::{create_shape, shape_profile, Shape, ShapeType, Vec2};
use hanabitalk_engine::{EngineConfig, MessageEvent, Stage};

fn burst(shape_type: ShapeType, count: usize) -> Vec<Particle> {
    let shape = create_shape(shape_type);
    let profile = shape_profile(shape_type);
    let mut rng = fastrand::Rng::with_seed(77);
    shape
        .seed_burst(count, 2.2, &mut rng)
        .iter()
        .map(|seed| {
            Particle::from_seed(
                Vec2::new(400.0, 300.0),
                seed,
                1.0,
                [1.0, 0.5, 0.2],
                profile.trail_capacity,
            )
        })
        .collect()
}

fn bench_simulator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulator");
    let profile = shape_profile(ShapeType::Classic);
    let decay = decay_per_tick(6.0, 60.0);

    for count in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("step", count), &count, |b, &count| {
            let particles = burst(ShapeType::Classic, count);
            b.iter(|| {
                let mut ps = particles.clone();
                black_box(step(&mut ps, &profile, decay));
            });
        });
    }
    group.finish();
}

fn bench_seed_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("Seeding");

    for shape_type in ShapeType::all() {
        let shape = create_shape(*shape_type);
        let count = shape_profile(*shape_type).count;
        group.bench_function(shape_type.name(), |b| {
            let mut rng = fastrand::Rng::with_seed(5);
            b.iter(|| {
                black_box(shape.seed_burst(count, 2.2, &mut rng));
            });
        });
    }
    group.finish();
}

fn bench_stage_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stage");

    group.bench_function("tick_all_10_live", |b| {
        let mut stage = Stage::new(EngineConfig {
            rng_seed: Some(1),
            ..EngineConfig::default()
        });
        for i in 0..10 {
            stage
                .spawn(&MessageEvent::new(format!("bench message {}", i), "#00ff88"))
                .unwrap();
        }
        // past the launch phase so every instance is simulating particles
        for _ in 0..180 {
            stage.tick_all(1.0 / 60.0);
        }
        b.iter(|| {
            stage.tick_all(black_box(1.0 / 60.0));
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_simulator_step,
    bench_seed_burst,
    bench_stage_tick
);
criterion_main!(benches);
