//! World facade - owns the grid, the scheduler, the player and the command queue

use std::collections::VecDeque;

use glam::Vec2;
use thiserror::Error;

use super::collision::CollisionDetector;
use super::commands::SandboxCommand;
use super::grid::{Grid, GridError};
use super::player_physics::{PhysicsOutcome, PlayerPhysicsSystem};
use super::scene::{SceneCell, SceneLoadReport, SceneOrigin};
use super::scheduler::TickScheduler;
use crate::config::{ConfigError, SimConfig};
use crate::entity::{InputState, Player};
use crate::simulation::Material;
use crate::tools::Brush;
use crate::world::{SimStats, WorldRng};

/// Failure to build a world
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid simulation config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// The sandbox: one grid, one optional player.
///
/// A tick is strictly sequential: queued commands, then the cellular automaton
/// sweep, then player physics. Hosts read the grid and player pose between ticks.
pub struct World {
    config: SimConfig,
    grid: Grid,
    scheduler: TickScheduler,
    /// Present only while play mode is active
    player: Option<Player>,
    input: InputState,
    commands: VecDeque<SandboxCommand>,
    tick_count: u64,
}

impl World {
    pub fn new(config: SimConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let grid = Grid::new(config.grid.width, config.grid.height)?;
        let scheduler = TickScheduler::new(&grid);

        log::info!(
            "World created: {}x{} cells",
            grid.width(),
            grid.height()
        );

        Ok(Self {
            config,
            grid,
            scheduler,
            player: None,
            input: InputState::default(),
            commands: VecDeque::new(),
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Queue a command for the start of the next tick
    pub fn push_command(&mut self, command: SandboxCommand) {
        self.commands.push_back(command);
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Paint a disk immediately. Returns the number of cells written.
    pub fn paint(&mut self, x: i32, y: i32, radius: u32, brush: Brush) -> usize {
        let written = brush.tool().apply(&mut self.grid, x, y, radius);
        log::debug!(
            "Painted {:?} at ({}, {}) r={}: {} cells",
            brush,
            x,
            y,
            radius,
            written
        );
        written
    }

    /// Paint with the configured default radius for this brush
    pub fn paint_default(&mut self, x: i32, y: i32, brush: Brush) -> usize {
        let radius = self.config.brush.radius_for(brush);
        self.paint(x, y, radius, brush)
    }

    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    /// Replace the grid contents with a scene payload.
    ///
    /// Unknown codes load as stone; cells outside the grid (or whose shifted
    /// coordinates overflow) are dropped. The
    /// player, if any, goes back to spawn.
    pub fn load_scene(&mut self, cells: &[SceneCell], origin: SceneOrigin) -> SceneLoadReport {
        self.grid.clear();

        let (offset_x, offset_y) = origin.offset(self.grid.width(), self.grid.height());
        let mut report = SceneLoadReport::default();

        for cell in cells {
            let material = match Material::try_from(cell.code) {
                Ok(material) => material,
                Err(_) => {
                    report.substituted += 1;
                    Material::from_code_lossy(cell.code)
                }
            };
            let target = cell
                .x
                .checked_add(offset_x)
                .zip(cell.y.checked_add(offset_y));
            match target {
                Some((x, y)) if self.grid.set(x, y, material) => report.placed += 1,
                _ => report.skipped += 1,
            }
        }

        if report.substituted > 0 || report.skipped > 0 {
            log::warn!(
                "Scene payload had {} unknown codes and {} out-of-grid cells",
                report.substituted,
                report.skipped
            );
        }
        log::info!("Scene loaded: {} cells placed", report.placed);

        self.respawn_player();
        report
    }

    /// Clear the grid and send the player back to spawn
    pub fn reset_scene(&mut self) {
        self.grid.clear();
        self.respawn_player();
        log::info!("Scene reset");
    }

    /// Enter play mode, creating the player at spawn
    pub fn start_play(&mut self) {
        self.player = Some(Player::new(self.config.player.spawn));
        log::info!(
            "Play mode started, player at ({}, {})",
            self.config.player.spawn.x,
            self.config.player.spawn.y
        );
    }

    /// Leave play mode, discarding the player
    pub fn stop_play(&mut self) {
        if self.player.take().is_some() {
            log::info!("Play mode stopped");
        }
        self.input = InputState::default();
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_some()
    }

    /// Respawn player at spawn point, if play mode is active
    pub fn respawn_player(&mut self) {
        let spawn = self.config.player.spawn;
        if let Some(player) = self.player.as_mut() {
            player.respawn(spawn);
            log::info!("Player respawned at ({}, {})", spawn.x, spawn.y);
        }
    }

    /// Move the player without physics. Returns false outside play mode.
    pub fn teleport_player(&mut self, position: Vec2) -> bool {
        match self.player.as_mut() {
            Some(player) => {
                player.position = position;
                player.velocity = Vec2::ZERO;
                true
            }
            None => false,
        }
    }

    /// Run one tick.
    ///
    /// Returns the player physics outcome, or `None` outside play mode.
    pub fn update<R: WorldRng>(
        &mut self,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> Option<PhysicsOutcome> {
        self.drain_commands();

        self.scheduler
            .step(&mut self.grid, &self.config.fire, stats, rng);

        let outcome = self.update_player();
        self.tick_count += 1;
        outcome
    }

    fn drain_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            log::trace!("Applying command {:?}", command);
            match command {
                SandboxCommand::Paint {
                    x,
                    y,
                    radius,
                    brush,
                } => {
                    self.paint(x, y, radius, brush);
                }
                SandboxCommand::SetInput(input) => self.set_input(input),
                SandboxCommand::LoadScene { cells, origin } => {
                    self.load_scene(&cells, origin);
                }
                SandboxCommand::ResetScene => self.reset_scene(),
                SandboxCommand::StartPlay => self.start_play(),
                SandboxCommand::StopPlay => self.stop_play(),
            }
        }
    }

    fn update_player(&mut self) -> Option<PhysicsOutcome> {
        // Split borrows: the sampler reads the grid while the player mutates
        let player = self.player.as_mut()?;
        let grid = &self.grid;
        let config = &self.config.player;

        Some(PlayerPhysicsSystem::update(
            player,
            &self.input,
            config,
            |center| {
                CollisionDetector::sample_box(grid, center, config.half_extent, config.solid_edges)
            },
        ))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for hosts that edit between ticks
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Full byte snapshot of the grid, row-major
    pub fn snapshot(&self) -> Vec<u8> {
        self.grid.codes()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_pose(&self) -> Option<Vec2> {
        self.player.as_ref().map(Player::pose)
    }

    /// Non-empty cell total, for display
    pub fn active_cell_count(&self) -> usize {
        self.grid.count_non_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
