use anatomy_engine::config::{EngineConfig, FountainConfig};
use anatomy_engine::mesh::Mesh;
use anatomy_engine::recipes::{membrane_mesh, Catalog};
use anatomy_engine::scene::{ParticleSystem, SceneComposer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: building each structure from scratch
fn bench_resolve(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("resolve");

    for name in ["DNA Helix", "Heart", "T-Cells", "White Blood Cells", "Human Female"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, name| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(catalog.resolve(black_box(name), &mut rng)));
        });
    }

    group.finish();
}

/// Benchmark: displaced sphere with normal recomputation
fn bench_membrane_mesh(c: &mut Criterion) {
    c.bench_function("membrane_mesh", |b| {
        b.iter(|| black_box(membrane_mesh()))
    });

    c.bench_function("uv_sphere_64x64", |b| {
        b.iter(|| black_box(Mesh::uv_sphere(black_box(1.0), 64, 64)))
    });
}

/// Benchmark: one fountain tick at increasing particle counts
fn bench_fountain_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("fountain_advance");

    for count in [200usize, 2_000, 20_000] {
        let config = EngineConfig {
            fountain: FountainConfig {
                particle_count: count,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut system = ParticleSystem::fountain(&config.fountain, [1.0, 0.0, 0.0], &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| system.advance());
        });
    }

    group.finish();
}

/// Benchmark: full frame of a pulsing structure with particles
fn bench_animate_heart(c: &mut Criterion) {
    let mut composer = SceneComposer::with_seed(EngineConfig::default(), 3);
    composer.load("Heart");
    let mut frame = 0u32;

    c.bench_function("animate_heart", |b| {
        b.iter(|| {
            frame += 1;
            composer.animate(black_box(frame as f32 / 60.0));
        })
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_membrane_mesh,
    bench_fountain_advance,
    bench_animate_heart
);
criterion_main!(benches);
