//! Verification conditions and state checks for scenarios

use sandpit_core::World;
use sandpit_core::simulation::Material;
use serde::{Deserialize, Serialize};

/// Conditions that can be verified against world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerificationCondition {
    // === MATERIAL CHECKS ===
    /// Assert material at a specific cell (out of grid reads as empty)
    MaterialAt { x: i32, y: i32, expected: Material },

    /// Assert material count in region
    MaterialCount {
        material: Material,
        #[serde(default)]
        region: Region,
        expected: usize,
        #[serde(default)]
        tolerance: Option<usize>, // Allow ±N variance
    },

    /// Assert no material in region (all empty)
    RegionEmpty { region: Region },

    /// Assert the non-empty cell total
    ActiveCellCount {
        expected: usize,
        #[serde(default)]
        tolerance: Option<usize>,
    },

    // === PLAYER STATE CHECKS ===
    /// Assert player position (with tolerance)
    PlayerPosition { x: f32, y: f32, tolerance: f32 },

    /// Assert player is grounded
    PlayerGrounded { expected: bool },

    /// Assert player overlaps water
    PlayerInWater { expected: bool },

    // === LOGICAL OPERATORS ===
    /// All conditions must pass
    All {
        conditions: Vec<VerificationCondition>,
    },

    /// Any condition must pass
    Any {
        conditions: Vec<VerificationCondition>,
    },

    /// Condition must NOT pass
    Not {
        condition: Box<VerificationCondition>,
    },
}

/// Spatial region for verification, in grid cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Inclusive rectangle
    Rect {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },

    /// Disk of cells within `radius` of the center
    Circle {
        center_x: i32,
        center_y: i32,
        radius: u32,
    },

    /// Entire grid
    #[default]
    Whole,
}

impl Region {
    /// Grid cells covered by this region, clipped to the grid
    fn cells<'a>(&self, world: &'a World) -> Box<dyn Iterator<Item = Material> + 'a> {
        let grid = world.grid();
        match *self {
            Region::Whole => Box::new(grid.iter().map(|(_, _, material)| material)),
            Region::Rect {
                min_x,
                min_y,
                max_x,
                max_y,
            } => Box::new(
                (min_y..=max_y)
                    .flat_map(move |y| (min_x..=max_x).map(move |x| (x, y)))
                    .filter_map(move |(x, y)| grid.get(x, y)),
            ),
            Region::Circle {
                center_x,
                center_y,
                radius,
            } => {
                let r = radius as i32;
                Box::new(
                    (-r..=r)
                        .flat_map(move |dy| (-r..=r).map(move |dx| (dx, dy)))
                        .filter(move |(dx, dy)| dx * dx + dy * dy <= r * r)
                        .filter_map(move |(dx, dy)| grid.get(center_x + dx, center_y + dy)),
                )
            }
        }
    }
}

/// Result of a verification check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub passed: bool,
    pub message: String,
    pub actual_value: Option<String>, // For debugging
}

impl VerificationResult {
    fn no_player(what: &str) -> Self {
        Self {
            passed: false,
            message: format!("{}: play mode is not active", what),
            actual_value: None,
        }
    }
}

impl VerificationCondition {
    /// Evaluate condition against world state
    pub fn evaluate(&self, world: &World) -> VerificationResult {
        match self {
            VerificationCondition::MaterialAt { x, y, expected } => {
                let actual = world.grid().get(*x, *y).unwrap_or(Material::Empty);
                let passed = actual == *expected;

                VerificationResult {
                    passed,
                    message: format!(
                        "Material at ({}, {}): expected {}, got {}",
                        x, y, expected, actual
                    ),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::MaterialCount {
                material,
                region,
                expected,
                tolerance,
            } => {
                let actual = count_material_in_region(world, *material, region);
                let tol = tolerance.unwrap_or(0);
                let passed = within(actual, *expected, tol);

                VerificationResult {
                    passed,
                    message: format!(
                        "{} count in {:?}: expected {}±{}, got {}",
                        material, region, expected, tol, actual
                    ),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::RegionEmpty { region } => {
                let empty = count_material_in_region(world, Material::Empty, region);
                let total = region.cells(world).count();
                let passed = empty == total;

                VerificationResult {
                    passed,
                    message: format!(
                        "Region {:?} empty: {} empty / {} total cells",
                        region, empty, total
                    ),
                    actual_value: Some(format!("{}/{}", empty, total)),
                }
            }

            VerificationCondition::ActiveCellCount {
                expected,
                tolerance,
            } => {
                let actual = world.active_cell_count();
                let tol = tolerance.unwrap_or(0);

                VerificationResult {
                    passed: within(actual, *expected, tol),
                    message: format!(
                        "Active cells: expected {}±{}, got {}",
                        expected, tol, actual
                    ),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::PlayerPosition { x, y, tolerance } => {
                let Some(pos) = world.player_pose() else {
                    return VerificationResult::no_player("Player position");
                };
                let dist = ((pos.x - x).powi(2) + (pos.y - y).powi(2)).sqrt();
                let passed = dist <= *tolerance;

                VerificationResult {
                    passed,
                    message: format!(
                        "Player position: expected ({}, {}) ±{}, got ({:.1}, {:.1}), distance {:.1}",
                        x, y, tolerance, pos.x, pos.y, dist
                    ),
                    actual_value: Some(format!("({:.1}, {:.1})", pos.x, pos.y)),
                }
            }

            VerificationCondition::PlayerGrounded { expected } => {
                let Some(player) = world.player() else {
                    return VerificationResult::no_player("Player grounded");
                };
                let actual = player.grounded;

                VerificationResult {
                    passed: actual == *expected,
                    message: format!("Player grounded: expected {}, got {}", expected, actual),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::PlayerInWater { expected } => {
                let Some(player) = world.player() else {
                    return VerificationResult::no_player("Player in water");
                };
                let actual = player.in_water;

                VerificationResult {
                    passed: actual == *expected,
                    message: format!("Player in water: expected {}, got {}", expected, actual),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::All { conditions } => {
                let results: Vec<_> = conditions.iter().map(|c| c.evaluate(world)).collect();
                let passed = results.iter().all(|r| r.passed);

                VerificationResult {
                    passed,
                    message: format!("All({})", join_messages(&results)),
                    actual_value: None,
                }
            }

            VerificationCondition::Any { conditions } => {
                let results: Vec<_> = conditions.iter().map(|c| c.evaluate(world)).collect();
                let passed = results.iter().any(|r| r.passed);

                VerificationResult {
                    passed,
                    message: format!("Any({})", join_messages(&results)),
                    actual_value: None,
                }
            }

            VerificationCondition::Not { condition } => {
                let result = condition.evaluate(world);

                VerificationResult {
                    passed: !result.passed,
                    message: format!("Not({})", result.message),
                    actual_value: result.actual_value,
                }
            }
        }
    }
}

fn within(actual: usize, expected: usize, tolerance: usize) -> bool {
    actual >= expected.saturating_sub(tolerance) && actual <= expected + tolerance
}

fn count_material_in_region(world: &World, material: Material, region: &Region) -> usize {
    region.cells(world).filter(|m| *m == material).count()
}

fn join_messages(results: &[VerificationResult]) -> String {
    results
        .iter()
        .map(|r| format!("{} {}", if r.passed { "✓" } else { "✗" }, r.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandpit_core::SimConfig;
    use sandpit_core::tools::Brush;

    fn world_with_stone_floor() -> World {
        let mut world = World::new(SimConfig::with_grid(10, 10)).unwrap();
        for x in 0..10 {
            world.grid_mut().set(x, 0, Material::Stone);
        }
        world
    }

    #[test]
    fn test_material_checks() {
        let world = world_with_stone_floor();

        assert!(
            VerificationCondition::MaterialAt {
                x: 3,
                y: 0,
                expected: Material::Stone
            }
            .evaluate(&world)
            .passed
        );
        // Out of grid reads as empty
        assert!(
            VerificationCondition::MaterialAt {
                x: -3,
                y: 0,
                expected: Material::Empty
            }
            .evaluate(&world)
            .passed
        );

        let whole = VerificationCondition::MaterialCount {
            material: Material::Stone,
            region: Region::Whole,
            expected: 10,
            tolerance: None,
        };
        assert!(whole.evaluate(&world).passed);

        let rect = VerificationCondition::MaterialCount {
            material: Material::Stone,
            region: Region::Rect {
                min_x: 2,
                min_y: 0,
                max_x: 4,
                max_y: 5,
            },
            expected: 2,
            tolerance: Some(1),
        };
        let result = rect.evaluate(&world);
        assert!(result.passed);
        assert_eq!(result.actual_value.as_deref(), Some("3"));
    }

    #[test]
    fn test_region_empty_and_active_count() {
        let mut world = world_with_stone_floor();
        world.paint(5, 5, 1, Brush::Material(Material::Water));

        let above_floor = Region::Rect {
            min_x: 0,
            min_y: 1,
            max_x: 9,
            max_y: 9,
        };
        assert!(
            !VerificationCondition::RegionEmpty {
                region: above_floor
            }
            .evaluate(&world)
            .passed
        );
        assert!(
            VerificationCondition::RegionEmpty {
                region: Region::Circle {
                    center_x: 1,
                    center_y: 8,
                    radius: 1
                }
            }
            .evaluate(&world)
            .passed
        );
        assert!(
            VerificationCondition::ActiveCellCount {
                expected: 15,
                tolerance: None
            }
            .evaluate(&world)
            .passed
        );
    }

    #[test]
    fn test_player_checks_need_play_mode() {
        let mut world = world_with_stone_floor();
        let grounded = VerificationCondition::PlayerGrounded { expected: false };

        let result = grounded.evaluate(&world);
        assert!(!result.passed);
        assert!(result.message.contains("play mode"));

        world.start_play();
        assert!(grounded.evaluate(&world).passed);

        let spawn = world.config().player.spawn;
        let at_spawn = VerificationCondition::PlayerPosition {
            x: spawn.x,
            y: spawn.y,
            tolerance: 0.1,
        };
        assert!(at_spawn.evaluate(&world).passed);
        assert!(
            VerificationCondition::PlayerInWater { expected: false }
                .evaluate(&world)
                .passed
        );
    }

    #[test]
    fn test_logical_operators() {
        let world = world_with_stone_floor();
        let yes = VerificationCondition::ActiveCellCount {
            expected: 10,
            tolerance: None,
        };
        let no = VerificationCondition::ActiveCellCount {
            expected: 0,
            tolerance: None,
        };

        let all = VerificationCondition::All {
            conditions: vec![yes.clone(), no.clone()],
        };
        let any = VerificationCondition::Any {
            conditions: vec![yes.clone(), no.clone()],
        };
        let not = VerificationCondition::Not {
            condition: Box::new(no),
        };

        assert!(!all.evaluate(&world).passed);
        assert!(any.evaluate(&world).passed);
        assert!(not.evaluate(&world).passed);
    }

    #[test]
    fn test_conditions_from_ron() {
        let conditions: Vec<VerificationCondition> = ron::from_str(
            r#"[
                MaterialAt(x: 5, y: 1, expected: Sand),
                MaterialCount(material: Sand, expected: 1),
                RegionEmpty(region: Rect(min_x: 0, min_y: 2, max_x: 9, max_y: 9)),
                Not(condition: PlayerGrounded(expected: true)),
            ]"#,
        )
        .unwrap();

        assert_eq!(conditions.len(), 4);
        assert!(matches!(
            conditions[1],
            VerificationCondition::MaterialCount {
                region: Region::Whole,
                tolerance: None,
                ..
            }
        ));
    }
}
