//! Pen tool for drawing materials

use super::{Tool, draw_circle};
use crate::simulation::Material;
use crate::world::Grid;

/// Pen tool that draws a specific material
pub struct PenTool {
    material: Material,
}

impl PenTool {
    /// Create a new pen tool for the given material
    pub fn new(material: Material) -> Self {
        Self { material }
    }

    pub fn material(&self) -> Material {
        self.material
    }
}

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply(&self, grid: &mut Grid, x: i32, y: i32, radius: u32) -> usize {
        draw_circle(grid, x, y, radius, self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_overwrites_anything() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.fill(Material::Stone);

        let pen = PenTool::new(Material::Sand);
        pen.apply(&mut grid, 4, 4, 1);
        assert_eq!(grid.count(Material::Sand), 5);

        let pen = PenTool::new(Material::Wood);
        assert_eq!(pen.material(), Material::Wood);
        pen.apply(&mut grid, 4, 4, 0);
        assert_eq!(grid.get(4, 4), Some(Material::Wood));
    }
}
