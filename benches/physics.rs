//! Benchmarks for poleworld physics simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use poleworld::*;

fn stacked_world(bodies: usize, dynamic_collisions: bool) -> Physics<f32> {
    let config = PhysicsConfig::new()
        .with_gravity(Vec2::new(0.0, -30.0))
        .with_iterations(8)
        .with_dynamic_collisions(dynamic_collisions);
    let mut world = Physics::new(config);
    world.add_static_box(Vec2::new(-50.0, -1.0), Vec2::new(50.0, 0.0)).unwrap();
    for i in 0..bodies {
        let x = -25.0 + (i % 50) as f32;
        let y = 1.0 + (i / 50) as f32;
        world.add_dynamic_body(DynamicBody::rectangle(Vec2::new(x, y), 0.5, 0.5).unwrap());
    }
    world
}

fn bench_pole_relaxation(c: &mut Criterion) {
    c.bench_function("hexadecagon_relax_1000_passes", |b| {
        let vertices: Vec<Vec2<f32>> = (0..16)
            .map(|i| {
                let angle = 2.0 * core::f32::consts::PI * i as f32 / 16.0;
                Vec2::new(angle.cos(), angle.sin())
            })
            .collect();
        b.iter(|| {
            let mut body = DynamicBody::polygon(&vertices).unwrap();
            body.point_mut(0).pos = Vec2::new(3.0, 0.0);
            for _ in 0..1000 {
                body.relax();
            }
            body.positions()
        });
    });
}

fn bench_static_collisions(c: &mut Criterion) {
    c.bench_function("100_boxes_on_floor_60_steps", |b| {
        b.iter(|| {
            let mut world = stacked_world(100, false);
            for _ in 0..60 {
                world.step(1.0 / 60.0);
            }
            world.contacts().len()
        });
    });
}

fn bench_dynamic_collisions(c: &mut Criterion) {
    c.bench_function("100_boxes_dynamic_pairs_60_steps", |b| {
        b.iter(|| {
            let mut world = stacked_world(100, true);
            for _ in 0..60 {
                world.step(1.0 / 60.0);
            }
            world.contacts().len()
        });
    });
}

criterion_group!(benches, bench_pole_relaxation, bench_static_collisions, bench_dynamic_collisions);
criterion_main!(benches);
