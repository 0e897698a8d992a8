//! Box-vs-grid sampling for the player

use glam::Vec2;

use super::grid::Grid;
use crate::simulation::Material;

/// What a box overlaps at a candidate position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxSample {
    /// Any stone, wood or sand
    pub solid: bool,
    /// Any water
    pub fluid: bool,
    /// Any fire
    pub fire: bool,
}

/// Collision queries against the grid
pub struct CollisionDetector;

impl CollisionDetector {
    /// Sample every cell whose center lies inside the box `center ± half_extent`.
    ///
    /// Cell (x, y) has its center at (x, y). Cells outside the grid count as
    /// empty, or as solid when `solid_edges` is set.
    pub fn sample_box(grid: &Grid, center: Vec2, half_extent: Vec2, solid_edges: bool) -> BoxSample {
        let min_x = (center.x - half_extent.x).ceil() as i32;
        let max_x = (center.x + half_extent.x).floor() as i32;
        let min_y = (center.y - half_extent.y).ceil() as i32;
        let max_y = (center.y + half_extent.y).floor() as i32;

        let mut sample = BoxSample::default();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                match grid.get(x, y) {
                    Some(material) => {
                        sample.solid |= material.is_solid();
                        sample.fluid |= material.is_fluid();
                        sample.fire |= material == Material::Fire;
                    }
                    None => sample.solid |= solid_edges,
                }
            }
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec2 = Vec2::new(1.0, 1.75);

    #[test]
    fn test_empty_grid_samples_nothing() {
        let grid = Grid::new(10, 10).unwrap();
        let sample = CollisionDetector::sample_box(&grid, Vec2::new(5.0, 5.0), HALF, false);
        assert_eq!(sample, BoxSample::default());
    }

    #[test]
    fn test_solid_fluid_fire_classification() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(5, 4, Material::Wood);
        let sample = CollisionDetector::sample_box(&grid, Vec2::new(5.0, 5.0), HALF, false);
        assert!(sample.solid && !sample.fluid && !sample.fire);

        grid.set(5, 4, Material::Water);
        let sample = CollisionDetector::sample_box(&grid, Vec2::new(5.0, 5.0), HALF, false);
        assert!(!sample.solid && sample.fluid);

        grid.set(6, 6, Material::Fire);
        let sample = CollisionDetector::sample_box(&grid, Vec2::new(5.0, 5.0), HALF, false);
        assert!(sample.fire);
    }

    #[test]
    fn test_sampled_range_is_cell_centers_inside_box() {
        let mut grid = Grid::new(10, 10).unwrap();
        // Box x range is [4.5, 6.5] so cell 4 is outside, cell 6 inside
        grid.set(4, 5, Material::Stone);
        let sample = CollisionDetector::sample_box(&grid, Vec2::new(5.5, 5.0), HALF, false);
        assert!(!sample.solid);

        grid.set(6, 5, Material::Stone);
        let sample = CollisionDetector::sample_box(&grid, Vec2::new(5.5, 5.0), HALF, false);
        assert!(sample.solid);
    }

    #[test]
    fn test_edge_policy() {
        let grid = Grid::new(10, 10).unwrap();
        let outside = Vec2::new(-3.0, 5.0);

        assert!(!CollisionDetector::sample_box(&grid, outside, HALF, false).solid);
        assert!(CollisionDetector::sample_box(&grid, outside, HALF, true).solid);
    }
}
