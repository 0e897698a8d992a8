//! World management - grid, rules, scheduling, player

mod ca_update;
mod collision;
mod commands;
mod grid;
mod moved_mask;
mod player_physics;
pub mod rng_trait;
mod scene;
mod scheduler;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use ca_update::CellularAutomataUpdater;
pub use collision::{BoxSample, CollisionDetector};
pub use commands::SandboxCommand;
pub use grid::{CellChange, Grid, GridError};
pub use moved_mask::MovedMask;
pub use player_physics::{PhysicsOutcome, PlayerPhysicsSystem, RespawnCause};
pub use rng_trait::WorldRng;
pub use scene::{SceneCell, SceneLoadReport, SceneOrigin};
pub use scheduler::TickScheduler;
pub use stats::{NoopStats, SimStats, TickStats};
pub use world::{World, WorldError};
