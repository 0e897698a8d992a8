//! Scripted actions a scenario can perform

use sandpit_core::simulation::Material;
use sandpit_core::world::{SceneCell, SceneOrigin};
use serde::{Deserialize, Serialize};

use super::verification::VerificationCondition;

/// One step of a scenario script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScenarioAction {
    // === GRID EDITS ===
    /// Brush stroke; `Empty` erases. Without a radius the configured
    /// pen or eraser radius is used.
    Paint {
        x: i32,
        y: i32,
        material: Material,
        #[serde(default)]
        radius: Option<u32>,
    },

    /// Fill an inclusive rectangle of cells
    FillRect {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
        material: Material,
    },

    /// Replace the grid with a scene payload
    LoadScene {
        cells: Vec<SceneCell>,
        #[serde(default)]
        origin: SceneOrigin,
    },

    /// Clear the grid and respawn the player
    ResetScene,

    // === PLAYER ===
    StartPlay,

    StopPlay,

    /// Hold these controls until changed
    SetInput {
        #[serde(default)]
        left: bool,
        #[serde(default)]
        right: bool,
        #[serde(default)]
        jump: bool,
    },

    /// Move the player without physics
    TeleportPlayer { x: f32, y: f32 },

    // === TIMING ===
    /// Advance the simulation
    WaitTicks { ticks: usize },

    /// Advance until the condition holds, fail after the timeout
    WaitUntil {
        condition: VerificationCondition,
        timeout_ticks: usize,
    },

    // === MISC ===
    Log { message: String },
}
