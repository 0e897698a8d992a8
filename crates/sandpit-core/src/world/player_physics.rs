//! Player physics system - drag, gravity, buoyancy, jumping, collision

use glam::Vec2;

use super::collision::BoxSample;
use crate::config::PlayerConfig;
use crate::entity::{InputState, Player};

/// Why the player was sent back to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnCause {
    /// Touched a fire cell
    Fire,
    /// Fell below the death line
    Fell,
}

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsOutcome {
    Moved,
    Respawned(RespawnCause),
}

/// Player physics system - one step per tick, fixed time unit
pub struct PlayerPhysicsSystem;

impl PlayerPhysicsSystem {
    /// Update player physics for one tick
    ///
    /// `sample` reports what the player box overlaps when centered at a
    /// candidate position. Each axis is tried separately: x first at the old
    /// y, then y at the committed x.
    pub fn update<F>(
        player: &mut Player,
        input: &InputState,
        config: &PlayerConfig,
        sample: F,
    ) -> PhysicsOutcome
    where
        F: Fn(Vec2) -> BoxSample,
    {
        // 1. Horizontal acceleration, then drag
        player.velocity.x += input.horizontal() as f32 * config.move_accel;
        if player.in_water {
            player.velocity *= config.water_drag;
        } else {
            player.velocity.x *= config.friction;
        }

        // 2. Horizontal move
        let next_x = player.position.x + player.velocity.x;
        let hit = sample(Vec2::new(next_x, player.position.y));
        if hit.fire {
            return Self::respawn(player, config, RespawnCause::Fire);
        }
        if hit.solid {
            player.velocity.x = 0.0;
        } else {
            player.position.x = next_x;
        }

        // 3. Vertical forces
        if player.in_water {
            player.velocity.y += config.buoyancy;
            if input.jump {
                player.velocity.y = config.swim_impulse;
            }
        } else {
            player.velocity.y -= config.gravity;
            if player.grounded && input.jump {
                player.velocity.y = config.jump_impulse;
                player.grounded = false;
                log::debug!("Player jumped");
            }
        }

        // 4. Vertical move
        let next_y = player.position.y + player.velocity.y;
        let hit = sample(Vec2::new(player.position.x, next_y));
        if hit.fire {
            return Self::respawn(player, config, RespawnCause::Fire);
        }
        player.in_water = hit.fluid;
        if hit.solid {
            if player.velocity.y < 0.0 {
                player.grounded = true;
            }
            player.velocity.y = 0.0;
        } else {
            player.position.y = next_y;
            player.grounded = false;
        }

        // 5. Fell off the world
        if player.position.y < config.death_y {
            return Self::respawn(player, config, RespawnCause::Fell);
        }

        PhysicsOutcome::Moved
    }

    fn respawn(player: &mut Player, config: &PlayerConfig, cause: RespawnCause) -> PhysicsOutcome {
        log::info!(
            "Player respawned at ({}, {}) after {:?}",
            config.spawn.x,
            config.spawn.y,
            cause
        );
        player.respawn(config.spawn);
        PhysicsOutcome::Respawned(cause)
    }
}
