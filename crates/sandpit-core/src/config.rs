//! Simulation configuration
//!
//! Plain serde structs with compiled defaults. Hosts decide where overrides come
//! from (files, environment); the core only validates what it is handed.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tools::Brush;
use crate::world::Grid;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroGrid { width: u32, height: u32 },

    #[error("grid dimensions must be at most {max} per side (got {width}x{height})")]
    OversizedGrid { width: u32, height: u32, max: u32 },

    #[error("{name} must be a probability in [0, 1] (got {value})")]
    NotAProbability { name: &'static str, value: f32 },

    #[error("upward ignition ({up}) must not be less likely than downward ignition ({down})")]
    HeatSinks { up: f32, down: f32 },

    #[error("player half extent must be positive (got {0:?})")]
    BadHalfExtent(Vec2),
}

/// Everything the core needs to build a [`crate::World`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub fire: FireConfig,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub brush: BrushConfig,
}

impl SimConfig {
    /// Config for a grid of the given size, with the player spawn and death line
    /// placed relative to it
    pub fn with_grid(width: u32, height: u32) -> Self {
        Self {
            grid: GridConfig { width, height },
            player: PlayerConfig::for_grid(width, height),
            ..Self::default()
        }
    }

    /// Same config on a different grid, with the spawn point moved to match
    pub fn resized(mut self, width: u32, height: u32) -> Self {
        self.grid = GridConfig { width, height };
        self.player.spawn = PlayerConfig::for_grid(width, height).spawn;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.fire.validate()?;
        self.player.validate()?;
        Ok(())
    }
}

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
}

impl GridConfig {
    pub const DEFAULT_WIDTH: u32 = 180;
    pub const DEFAULT_HEIGHT: u32 = 180;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > Grid::MAX_DIMENSION || self.height > Grid::MAX_DIMENSION {
            return Err(ConfigError::OversizedGrid {
                width: self.width,
                height: self.height,
                max: Grid::MAX_DIMENSION,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Fire tuning. All values are per-tick probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireConfig {
    /// Chance a fire cell goes out on its own
    pub burn_out_chance: f32,
    /// Chance to ignite wood directly above
    pub ignite_up: f32,
    /// Chance to ignite wood directly below
    pub ignite_down: f32,
    /// Chance to ignite wood left or right
    pub ignite_side: f32,
    /// Chance to try a diagonal rise when the cell above is blocked
    pub turbulence_chance: f32,
}

impl FireConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("burn_out_chance", self.burn_out_chance),
            ("ignite_up", self.ignite_up),
            ("ignite_down", self.ignite_down),
            ("ignite_side", self.ignite_side),
            ("turbulence_chance", self.turbulence_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::NotAProbability { name, value });
            }
        }
        // Heat rises
        if self.ignite_up < self.ignite_down {
            return Err(ConfigError::HeatSinks {
                up: self.ignite_up,
                down: self.ignite_down,
            });
        }
        Ok(())
    }
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            burn_out_chance: 0.03,
            ignite_up: 0.15,
            ignite_down: 0.01,
            ignite_side: 0.05,
            turbulence_chance: 0.5,
        }
    }
}

/// Player physics settings, in grid units per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal acceleration while a direction is held
    pub move_accel: f32,
    /// Velocity multiplier applied every tick out of water
    pub friction: f32,
    /// Velocity multiplier applied every tick while submerged
    pub water_drag: f32,
    /// Downward acceleration out of water
    pub gravity: f32,
    /// Upward acceleration while submerged
    pub buoyancy: f32,
    /// Vertical velocity set by a grounded jump
    pub jump_impulse: f32,
    /// Vertical velocity set by jumping while submerged
    pub swim_impulse: f32,
    /// Half width and half height of the player box
    pub half_extent: Vec2,
    /// Where the player appears on start, on death and on reset
    pub spawn: Vec2,
    /// Falling below this y respawns the player
    pub death_y: f32,
    /// Treat cells outside the grid as solid walls instead of open air
    pub solid_edges: bool,
}

impl PlayerConfig {
    /// Defaults with spawn point and death line placed for a grid of this size
    pub fn for_grid(width: u32, height: u32) -> Self {
        Self {
            spawn: Vec2::new((width / 2) as f32, (height / 2) as f32 + 30.0),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_extent.x <= 0.0 || self.half_extent.y <= 0.0 {
            return Err(ConfigError::BadHalfExtent(self.half_extent));
        }
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_accel: 0.4,
            friction: 0.8,
            water_drag: 0.85,
            gravity: 0.05,
            buoyancy: 0.02,
            jump_impulse: 0.8,
            swim_impulse: 0.5,
            half_extent: Vec2::new(1.0, 1.75),
            spawn: Vec2::new(
                (GridConfig::DEFAULT_WIDTH / 2) as f32,
                (GridConfig::DEFAULT_HEIGHT / 2) as f32 + 30.0,
            ),
            death_y: -20.0,
            solid_edges: false,
        }
    }
}

/// Default brush radii for the paint tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub pen_radius: u32,
    pub eraser_radius: u32,
}

impl BrushConfig {
    /// Radius the host uses when a stroke doesn't name one
    pub fn radius_for(&self, brush: Brush) -> u32 {
        match brush {
            Brush::Material(_) => self.pen_radius,
            Brush::Erase => self.eraser_radius,
        }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            pen_radius: 3,
            eraser_radius: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.grid.width, 180);
        assert_eq!(config.grid.height, 180);
        assert_eq!(config.fire.burn_out_chance, 0.03);
        assert_eq!(config.player.spawn, Vec2::new(90.0, 120.0));
        assert_eq!(config.brush.pen_radius, 3);
        assert_eq!(config.brush.eraser_radius, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_brush_radius_per_tool() {
        let brush = BrushConfig::default();
        assert_eq!(brush.radius_for(Brush::Erase), 6);
        assert_eq!(
            brush.radius_for(Brush::Material(crate::simulation::Material::Sand)),
            3
        );
    }

    #[test]
    fn test_with_grid_moves_spawn() {
        let config = SimConfig::with_grid(40, 20);
        assert_eq!(config.player.spawn, Vec2::new(20.0, 40.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resized_keeps_tuning() {
        let mut config = SimConfig::default();
        config.fire.burn_out_chance = 0.5;
        let config = config.resized(60, 40);
        assert_eq!(config.grid, GridConfig { width: 60, height: 40 });
        assert_eq!(config.player.spawn, Vec2::new(30.0, 50.0));
        assert_eq!(config.fire.burn_out_chance, 0.5);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let config = SimConfig::with_grid(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroGrid {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let config = SimConfig::with_grid(Grid::MAX_DIMENSION + 1, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OversizedGrid { max, .. }) if max == Grid::MAX_DIMENSION
        ));
        assert!(SimConfig::with_grid(Grid::MAX_DIMENSION, 1).validate().is_ok());
    }

    #[test]
    fn test_fire_probability_range() {
        let fire = FireConfig {
            burn_out_chance: 1.5,
            ..FireConfig::default()
        };
        assert!(matches!(
            fire.validate(),
            Err(ConfigError::NotAProbability {
                name: "burn_out_chance",
                ..
            })
        ));
    }

    #[test]
    fn test_fire_must_rise() {
        let fire = FireConfig {
            ignite_up: 0.01,
            ignite_down: 0.2,
            ..FireConfig::default()
        };
        assert!(matches!(fire.validate(), Err(ConfigError::HeatSinks { .. })));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: SimConfig = ron::from_str("(grid: (width: 32, height: 16))").unwrap();
        assert_eq!(config.grid.width, 32);
        assert_eq!(config.fire, FireConfig::default());
        assert_eq!(config.brush, BrushConfig::default());

        let config: SimConfig = ron::from_str("(fire: (ignite_up: 0.3))").unwrap();
        assert_eq!(config.fire.ignite_up, 0.3);
        assert_eq!(config.fire.ignite_down, 0.01);
    }
}
