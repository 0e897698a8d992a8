//! Simulation statistics collection trait

use serde::{Deserialize, Serialize};

/// Receives events from the material rules.
///
/// Lets the core report what happened during a tick without owning any
/// particular stats store.
pub trait SimStats {
    /// A cell moved (or swapped) one step
    fn record_cell_moved(&mut self);

    /// Fire spread into a wood cell
    fn record_ignition(&mut self);

    /// Fire was put out by neighboring water
    fn record_extinguished(&mut self);

    /// Fire went out on its own
    fn record_burned_out(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_moved(&mut self) {}
    fn record_ignition(&mut self) {}
    fn record_extinguished(&mut self) {}
    fn record_burned_out(&mut self) {}
}

/// Running event counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    pub cells_moved: u64,
    pub ignitions: u64,
    pub extinguished: u64,
    pub burned_out: u64,
}

impl TickStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl SimStats for TickStats {
    fn record_cell_moved(&mut self) {
        self.cells_moved += 1;
    }

    fn record_ignition(&mut self) {
        self.ignitions += 1;
    }

    fn record_extinguished(&mut self) {
        self.extinguished += 1;
    }

    fn record_burned_out(&mut self) {
        self.burned_out += 1;
    }
}
