//! Tick throughput on a full-size grid

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use sandpit_core::simulation::Material;
use sandpit_core::tools::Brush;
use sandpit_core::world::NoopStats;
use sandpit_core::{SimConfig, World};

fn busy_world() -> World {
    let mut world = World::new(SimConfig::default()).expect("default config is valid");
    for x in 0..180 {
        world.grid_mut().set(x, 0, Material::Stone);
    }
    for i in 0..12 {
        let x = 10 + i * 14;
        world.paint(x, 140, 6, Brush::Material(Material::Sand));
        world.paint(x + 7, 100, 6, Brush::Material(Material::Water));
        world.paint(x, 40, 4, Brush::Material(Material::Wood));
        world.paint(x, 46, 1, Brush::Material(Material::Fire));
    }
    world
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_180x180_mixed", |b| {
        let mut world = busy_world();
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        b.iter(|| {
            black_box(world.update(&mut NoopStats, &mut rng));
        });
    });

    c.bench_function("tick_180x180_with_player", |b| {
        let mut world = busy_world();
        world.start_play();
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        b.iter(|| {
            black_box(world.update(&mut NoopStats, &mut rng));
        });
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
