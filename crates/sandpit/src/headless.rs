//! Free-running tick loop without a scenario

use std::time::Instant;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use sandpit_core::World;
use sandpit_core::world::{PhysicsOutcome, TickStats};
use serde::{Deserialize, Serialize};

/// What a free run did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub seed: u64,
    pub active_cells: usize,
    pub stats: TickStats,
    pub respawns: u64,
    pub duration_ms: f64,
}

impl RunSummary {
    pub fn avg_tick_ms(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.duration_ms / self.ticks as f64
        }
    }
}

/// Advance the world `ticks` times with a seeded RNG
pub fn run_ticks(world: &mut World, ticks: u64, seed: u64, progress_interval: u64) -> RunSummary {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut stats = TickStats::default();
    let mut respawns = 0;
    let start = Instant::now();

    for tick in 1..=ticks {
        let outcome = world.update(&mut stats, &mut rng);
        if matches!(outcome, Some(PhysicsOutcome::Respawned(_))) {
            respawns += 1;
        }

        if progress_interval > 0 && tick % progress_interval == 0 {
            log::info!(
                "Tick {}/{}: {} active cells, {} moves so far",
                tick,
                ticks,
                world.active_cell_count(),
                stats.cells_moved
            );
        }
    }

    RunSummary {
        ticks,
        seed,
        active_cells: world.active_cell_count(),
        stats,
        respawns,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandpit_core::SimConfig;
    use sandpit_core::simulation::Material;
    use sandpit_core::tools::Brush;

    #[test]
    fn test_run_ticks_counts() {
        let mut world = World::new(SimConfig::with_grid(16, 16)).unwrap();
        world.paint(8, 12, 1, Brush::Material(Material::Sand));

        let summary = run_ticks(&mut world, 20, 7, 0);

        assert_eq!(summary.ticks, 20);
        assert_eq!(world.tick_count(), 20);
        assert_eq!(summary.active_cells, 5);
        assert!(summary.stats.cells_moved > 0);
    }

    #[test]
    fn test_same_seed_same_world() {
        let build = || {
            let mut world = World::new(SimConfig::with_grid(24, 24)).unwrap();
            world.paint(12, 18, 3, Brush::Material(Material::Water));
            world.paint(12, 10, 2, Brush::Material(Material::Sand));
            world
        };

        let mut a = build();
        let mut b = build();
        run_ticks(&mut a, 50, 1234, 0);
        run_ticks(&mut b, 50, 1234, 0);

        assert_eq!(a.snapshot(), b.snapshot());
    }
}
