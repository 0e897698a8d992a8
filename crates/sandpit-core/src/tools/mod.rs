//! Paint editor: disk-shaped brushes that overwrite grid cells
//!
//! Painting is a direct overwrite. It never touches the moved mask, so hosts
//! apply it between ticks (the [`crate::World`] command queue does this).

mod erase;
mod pen;

pub use erase::EraseTool;
pub use pen::PenTool;

use serde::{Deserialize, Serialize};

use crate::simulation::Material;
use crate::world::Grid;

/// What a paint stroke writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brush {
    /// Write this material
    Material(Material),
    /// Clear to empty
    Erase,
}

impl Brush {
    /// Material written by this brush
    pub fn material(self) -> Material {
        match self {
            Brush::Material(material) => material,
            Brush::Erase => Material::Empty,
        }
    }

    /// Tool implementing this brush
    pub fn tool(self) -> Box<dyn Tool> {
        match self {
            Brush::Material(material) => Box::new(PenTool::new(material)),
            Brush::Erase => Box::new(EraseTool),
        }
    }
}

impl From<Material> for Brush {
    fn from(material: Material) -> Self {
        if material.is_empty() {
            Brush::Erase
        } else {
            Brush::Material(material)
        }
    }
}

/// Trait for drawing tools
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply tool at position with the given radius, returns cells written
    fn apply(&self, grid: &mut Grid, x: i32, y: i32, radius: u32) -> usize;
}

/// Fill every cell within `radius` of the center (squared distance).
///
/// The scan is clamped to the grid, so huge radii or far-off centers cost no
/// more than the grid itself. Returns the number of cells written.
pub fn draw_circle(grid: &mut Grid, center_x: i32, center_y: i32, radius: u32, material: Material) -> usize {
    let (cx, cy, r) = (i64::from(center_x), i64::from(center_y), i64::from(radius));
    // Squared distances can exceed i64 for extreme centers and radii
    let r_sq = i128::from(r) * i128::from(r);

    let min_x = (cx - r).max(0);
    let max_x = (cx + r).min(i64::from(grid.width()) - 1);
    let min_y = (cy - r).max(0);
    let max_y = (cy + r).min(i64::from(grid.height()) - 1);

    let mut written = 0;
    for y in min_y..=max_y {
        let dy = i128::from(y - cy);
        for x in min_x..=max_x {
            let dx = i128::from(x - cx);
            // Clamped bounds are inside the grid, which fits in i32
            if dx * dx + dy * dy <= r_sq && grid.set(x as i32, y as i32, material) {
                written += 1;
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_shape() {
        let mut grid = Grid::new(20, 20).unwrap();
        let written = draw_circle(&mut grid, 10, 10, 2, Material::Stone);

        // r = 2 covers 13 cells: 5 + 3 + 3 + 1 + 1
        assert_eq!(written, 13);
        assert_eq!(grid.count(Material::Stone), 13);
        assert_eq!(grid.get(12, 10), Some(Material::Stone));
        assert_eq!(grid.get(12, 11), Some(Material::Empty));
        assert_eq!(grid.get(11, 11), Some(Material::Stone));
    }

    #[test]
    fn test_radius_zero_is_single_cell() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(draw_circle(&mut grid, 2, 2, 0, Material::Sand), 1);
        assert_eq!(grid.count_non_empty(), 1);
    }

    #[test]
    fn test_clipped_at_edges() {
        let mut grid = Grid::new(10, 10).unwrap();
        let written = draw_circle(&mut grid, 0, 0, 2, Material::Water);

        // Quarter disk plus its two axes: (0..=2) x (0..=2) minus (2,1),(1,2),(2,2)
        assert_eq!(written, 6);
        assert_eq!(grid.count(Material::Water), 6);
    }

    #[test]
    fn test_fully_outside_writes_nothing() {
        let mut grid = Grid::new(10, 10).unwrap();
        assert_eq!(draw_circle(&mut grid, -50, 50, 3, Material::Sand), 0);
        assert_eq!(grid.count_non_empty(), 0);
    }

    #[test]
    fn test_huge_radius_covers_grid() {
        let mut grid = Grid::new(10, 10).unwrap();
        assert_eq!(draw_circle(&mut grid, 5, 5, 50_000, Material::Sand), 100);
        assert_eq!(grid.count(Material::Sand), 100);

        grid.clear();
        assert_eq!(draw_circle(&mut grid, i32::MAX, i32::MIN, u32::MAX, Material::Wood), 100);
        assert_eq!(draw_circle(&mut grid, i32::MIN, 0, 3, Material::Wood), 0);
    }

    #[test]
    fn test_brush_from_material() {
        assert_eq!(Brush::from(Material::Empty), Brush::Erase);
        assert_eq!(Brush::from(Material::Wood), Brush::Material(Material::Wood));
        assert_eq!(Brush::Erase.material(), Material::Empty);
        assert_eq!(Brush::Material(Material::Fire).tool().name(), "Pen");
        assert_eq!(Brush::Erase.tool().name(), "Eraser");
    }
}
