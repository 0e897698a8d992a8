use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The player entity: one axis-aligned box in grid units.
///
/// Position is the box center. Row 0 of the grid is the bottom, so positive
/// velocity.y moves up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Landed on a solid cell while moving down
    pub grounded: bool,
    /// Overlapped water on the last vertical pass
    pub in_water: bool,
}

impl Player {
    /// Create a new player at rest at the given position
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            grounded: false,
            in_water: false,
        }
    }

    /// Teleport to the spawn point with zero velocity
    pub fn respawn(&mut self, spawn: Vec2) {
        *self = Self::new(spawn);
    }

    pub fn pose(&self) -> Vec2 {
        self.position
    }
}
