//! Inbound commands, queued by hosts and drained at the top of each tick

use serde::{Deserialize, Serialize};

use super::scene::{SceneCell, SceneOrigin};
use crate::entity::InputState;
use crate::tools::Brush;

/// One host request against the world.
///
/// Hosts push these from any input path; [`super::World::update`] applies them
/// in order before the sweep, so painting never interleaves with the rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SandboxCommand {
    /// Brush stroke centered on a cell
    Paint {
        x: i32,
        y: i32,
        radius: u32,
        brush: Brush,
    },
    /// Latest held controls
    SetInput(InputState),
    /// Replace the grid contents
    LoadScene {
        cells: Vec<SceneCell>,
        origin: SceneOrigin,
    },
    /// Clear the grid and respawn the player
    ResetScene,
    /// Create the player at spawn
    StartPlay,
    /// Discard the player
    StopPlay,
}
