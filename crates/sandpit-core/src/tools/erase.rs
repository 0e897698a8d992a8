//! Eraser tool

use super::{Tool, draw_circle};
use crate::simulation::Material;
use crate::world::Grid;

/// Eraser tool that clears cells to empty
pub struct EraseTool;

impl Tool for EraseTool {
    fn name(&self) -> &str {
        "Eraser"
    }

    fn apply(&self, grid: &mut Grid, x: i32, y: i32, radius: u32) -> usize {
        draw_circle(grid, x, y, radius, Material::Empty)
    }
}
