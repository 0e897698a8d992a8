//! Tick scheduler - sweep order and the per-tick moved mask

use super::ca_update::CellularAutomataUpdater;
use super::grid::Grid;
use super::moved_mask::MovedMask;
use crate::config::FireConfig;
use crate::simulation::MaterialType;
use crate::world::{SimStats, WorldRng};

/// Runs the material rules over every cell, once per tick, in a fixed order:
///
/// - Phase A sweeps rows bottom-up and dispatches sand and water, so falling
///   material settles in a single pass.
/// - Phase B sweeps rows top-down and dispatches fire, so rising cells are
///   never met again in the same tick.
///
/// The moved mask is owned here and cleared in place at the start of each tick.
pub struct TickScheduler {
    moved: MovedMask,
}

impl TickScheduler {
    pub fn new(grid: &Grid) -> Self {
        Self {
            moved: MovedMask::new(grid.len()),
        }
    }

    /// Marks left by the most recent tick
    pub fn moved(&self) -> &MovedMask {
        &self.moved
    }

    /// Advance the grid by one tick
    pub fn step<R: WorldRng>(
        &mut self,
        grid: &mut Grid,
        fire: &FireConfig,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        debug_assert_eq!(self.moved.len(), grid.len());
        self.moved.clear();

        // Grid dimensions are capped well below i32::MAX
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        let row_len = grid.width() as usize;

        // Phase A: gravity materials, bottom-up
        for y in 0..height {
            for x in 0..width {
                let idx = y as usize * row_len + x as usize;
                if self.moved.is_moved(idx) {
                    continue;
                }
                match grid.get_index(idx).material_type() {
                    MaterialType::Powder => {
                        CellularAutomataUpdater::update_sand(
                            grid,
                            &mut self.moved,
                            x,
                            y,
                            idx,
                            stats,
                            rng,
                        );
                    }
                    MaterialType::Liquid => {
                        CellularAutomataUpdater::update_water(
                            grid,
                            &mut self.moved,
                            x,
                            y,
                            idx,
                            stats,
                            rng,
                        );
                    }
                    _ => {}
                }
            }
        }

        // Phase B: rising material, top-down
        for y in (0..height).rev() {
            for x in 0..width {
                let idx = y as usize * row_len + x as usize;
                if self.moved.is_moved(idx) {
                    continue;
                }
                if grid.get_index(idx).material_type() == MaterialType::Fire {
                    CellularAutomataUpdater::update_fire(
                        grid,
                        &mut self.moved,
                        x,
                        y,
                        idx,
                        fire,
                        stats,
                        rng,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Material;
    use crate::world::NoopStats;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn floored_grid(width: u32, height: u32) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for x in 0..width as i32 {
            grid.set(x, 0, Material::Stone);
        }
        grid
    }

    #[test]
    fn test_sand_column_settles_in_one_tick_per_row() {
        let mut grid = floored_grid(5, 6);
        grid.set(2, 5, Material::Sand);
        let mut scheduler = TickScheduler::new(&grid);
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);

        for expected_y in (1..5).rev() {
            scheduler.step(&mut grid, &FireConfig::default(), &mut NoopStats, &mut rng);
            assert_eq!(grid.get(2, expected_y), Some(Material::Sand));
        }

        // Resting on the floor; further ticks don't move it
        for _ in 0..5 {
            scheduler.step(&mut grid, &FireConfig::default(), &mut NoopStats, &mut rng);
            assert_eq!(grid.get(2, 1), Some(Material::Sand));
        }
    }

    #[test]
    fn test_water_crosses_one_cell_per_tick() {
        // Enclosed corridor one cell tall
        let mut grid = floored_grid(8, 3);
        for x in 0..8 {
            grid.set(x, 2, Material::Stone);
        }
        grid.set(0, 1, Material::Water);
        let mut scheduler = TickScheduler::new(&grid);
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);

        scheduler.step(&mut grid, &FireConfig::default(), &mut NoopStats, &mut rng);

        // Only option from the left wall is one step right
        assert_eq!(grid.get(1, 1), Some(Material::Water));
        assert_eq!(grid.count(Material::Water), 1);
    }

    #[test]
    fn test_fire_rises_one_cell_per_tick() {
        let mut grid = Grid::new(3, 6).unwrap();
        grid.set(1, 0, Material::Fire);
        let mut scheduler = TickScheduler::new(&grid);
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let fire = FireConfig {
            burn_out_chance: 0.0,
            ..FireConfig::default()
        };

        scheduler.step(&mut grid, &fire, &mut NoopStats, &mut rng);

        assert_eq!(grid.get(1, 1), Some(Material::Fire));
        assert_eq!(grid.count(Material::Fire), 1);
    }

    #[test]
    fn test_mask_cleared_between_ticks() {
        let mut grid = floored_grid(3, 4);
        grid.set(1, 3, Material::Sand);
        let mut scheduler = TickScheduler::new(&grid);
        let mut rng = Xoshiro256StarStar::seed_from_u64(9);

        scheduler.step(&mut grid, &FireConfig::default(), &mut NoopStats, &mut rng);
        assert_eq!(scheduler.moved().count_marked(), 2);

        scheduler.step(&mut grid, &FireConfig::default(), &mut NoopStats, &mut rng);
        assert_eq!(scheduler.moved().count_marked(), 2);

        // Settled: nothing moves, nothing marked
        scheduler.step(&mut grid, &FireConfig::default(), &mut NoopStats, &mut rng);
        assert_eq!(scheduler.moved().count_marked(), 0);
    }
}
