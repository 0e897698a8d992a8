//! Cellular automata update logic - per-material rules for one cell, one tick
//!
//! Every move marks both the source and the destination in the moved mask, which
//! bounds propagation to one cell per tick. Tie-breaks between equally valid
//! destinations use a fair coin from the caller's RNG.

use super::grid::Grid;
use super::moved_mask::MovedMask;
use crate::config::FireConfig;
use crate::simulation::Material;
use crate::world::{SimStats, WorldRng};

/// Stateless material rules, driven by [`super::TickScheduler`]
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Sand falls straight down, else diagonally down, sinking through water.
    ///
    /// Empty destinations are always accepted; a vacated cell is fair game.
    /// Water is only displaced if it hasn't already moved this tick. Accepting
    /// any water would let a cell that already flowed be swapped back up and
    /// take a second step, breaking the one-move-per-tick rule. In practice the
    /// difference is small: water resting on a floor has not moved, so sand
    /// still sinks through standing pools.
    pub fn update_sand<R: WorldRng>(
        grid: &mut Grid,
        moved: &mut MovedMask,
        x: i32,
        y: i32,
        idx: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        if y == 0 {
            return false;
        }

        let sinks_into = |material: Material, dst_moved: bool| match material {
            Material::Empty => true,
            Material::Water => !dst_moved,
            _ => false,
        };

        // Try to move down
        if Self::try_move(grid, moved, idx, x, y - 1, sinks_into, stats) {
            return true;
        }

        // Try diagonals, random side first
        let dir = rng.gen_direction();
        for dx in [dir, -dir] {
            if Self::try_move(grid, moved, idx, x + dx, y - 1, sinks_into, stats) {
                return true;
            }
        }

        false
    }

    /// Water falls into empty space, else spreads one cell sideways.
    ///
    /// The sideways target must not have taken part in this tick yet; without
    /// that check a row scan would carry water across a whole empty corridor.
    pub fn update_water<R: WorldRng>(
        grid: &mut Grid,
        moved: &mut MovedMask,
        x: i32,
        y: i32,
        idx: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        // Sand handles the sand-over-water swap, so water only falls into air
        if y > 0 && Self::try_move(grid, moved, idx, x, y - 1, |m, _| m.is_empty(), stats) {
            return true;
        }

        let dir = rng.gen_direction();
        for dx in [dir, -dir] {
            if Self::try_move(
                grid,
                moved,
                idx,
                x + dx,
                y,
                |m, dst_moved| m.is_empty() && !dst_moved,
                stats,
            ) {
                return true;
            }
        }

        false
    }

    /// Fire burns out, spreads to wood, is doused by water, or rises.
    #[allow(clippy::too_many_arguments)]
    pub fn update_fire<R: WorldRng>(
        grid: &mut Grid,
        moved: &mut MovedMask,
        x: i32,
        y: i32,
        idx: usize,
        config: &FireConfig,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        // 1. Burn out
        if rng.check_probability(config.burn_out_chance) {
            grid.set_index(idx, Material::Empty);
            moved.mark(idx);
            stats.record_burned_out();
            log::trace!("Fire at ({}, {}) burned out", x, y);
            return true;
        }

        // 2. Spread to wood, look for water
        let mut doused = false;
        for (dx, dy, chance) in [
            (0, 1, config.ignite_up),
            (0, -1, config.ignite_down),
            (1, 0, config.ignite_side),
            (-1, 0, config.ignite_side),
        ] {
            let Some(n_idx) = grid.index(x + dx, y + dy) else {
                continue;
            };
            match grid.get_index(n_idx) {
                Material::Water => doused = true,
                Material::Wood => {
                    if rng.check_probability(chance) {
                        grid.set_index(n_idx, Material::Fire);
                        moved.mark(n_idx);
                        stats.record_ignition();
                    }
                }
                _ => {}
            }
        }

        // 3. Water puts it out
        if doused {
            grid.set_index(idx, Material::Empty);
            moved.mark(idx);
            stats.record_extinguished();
            log::trace!("Fire at ({}, {}) extinguished", x, y);
            return true;
        }

        // 4. Rise into air, with some sideways turbulence when blocked
        let into_air = |m: Material, _: bool| m.is_empty();
        if Self::try_move(grid, moved, idx, x, y + 1, into_air, stats) {
            return true;
        }
        if rng.check_probability(config.turbulence_chance) {
            let dx = rng.gen_direction();
            return Self::try_move(grid, moved, idx, x + dx, y + 1, into_air, stats);
        }

        false
    }

    /// Swap the cell at `src` with (to_x, to_y) if the destination accepts it.
    ///
    /// `accepts` sees the destination material and whether that cell already
    /// moved this tick. Out-of-bounds destinations are rejected.
    fn try_move<F>(
        grid: &mut Grid,
        moved: &mut MovedMask,
        src: usize,
        to_x: i32,
        to_y: i32,
        accepts: F,
        stats: &mut dyn SimStats,
    ) -> bool
    where
        F: Fn(Material, bool) -> bool,
    {
        let Some(dst) = grid.index(to_x, to_y) else {
            return false;
        };

        if !accepts(grid.get_index(dst), moved.is_moved(dst)) {
            return false;
        }

        grid.swap_index(src, dst);
        moved.mark(src);
        moved.mark(dst);
        stats.record_cell_moved();
        true
    }
}
