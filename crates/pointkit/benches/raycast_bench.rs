//! Criterion benchmarks for batched raycasts against `ShapeWorld`.
//! Run with `--features parallel` to compare the rayon fan-out.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector3;
use pointkit::raycast::{batched_raycast, Collider, LayerMask, Shape, ShapeWorld};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_world(colliders: usize, seed: u64) -> ShapeWorld {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = ShapeWorld::new();
    world.add(Collider {
        shape: Shape::Plane {
            normal: Vector3::y(),
            offset: 0.0,
        },
        layer: 9,
    });
    for _ in 0..colliders {
        let center = Vector3::new(
            rng.gen_range(-20.0..20.0),
            rng.gen_range(0.5..10.0),
            rng.gen_range(-20.0..20.0),
        );
        world.add(Collider {
            shape: Shape::Sphere {
                center,
                radius: rng.gen_range(0.2..2.0),
            },
            layer: 10,
        });
    }
    world
}

fn random_rays(n: usize, seed: u64) -> (Vec<Vector3<f64>>, Vec<Vector3<f64>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let origins = (0..n)
        .map(|_| Vector3::new(rng.gen_range(-20.0..20.0), 15.0, rng.gen_range(-20.0..20.0)))
        .collect();
    let dirs = (0..n)
        .map(|_| Vector3::new(rng.gen_range(-0.3..0.3), -1.0, rng.gen_range(-0.3..0.3)))
        .collect();
    (origins, dirs)
}

fn bench_batched(c: &mut Criterion) {
    let mut group = c.benchmark_group("raycast");
    let world = random_world(64, 7);
    for &n in &[64usize, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("batched", n), &n, |b, &n| {
            b.iter_batched(
                || random_rays(n, 11),
                |(o, d)| {
                    let _hits = batched_raycast(&world, &o, &d, 100.0, LayerMask::ALL).unwrap();
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_batched);
criterion_main!(benches);
