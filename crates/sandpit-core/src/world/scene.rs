//! Scene payloads: lists of cells produced by an external generator

use serde::{Deserialize, Serialize};

/// A cell in a scene payload, with a raw material code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneCell {
    pub x: i32,
    pub y: i32,
    pub code: u8,
}

impl SceneCell {
    pub fn new(x: i32, y: i32, code: u8) -> Self {
        Self { x, y, code }
    }
}

/// Where (0, 0) of a scene payload sits on the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneOrigin {
    /// Payload coordinates are grid coordinates
    #[default]
    Corner,
    /// Payload (0, 0) is the grid center
    Center,
}

impl SceneOrigin {
    /// Offset added to payload coordinates for a grid of this size
    pub fn offset(self, width: u32, height: u32) -> (i32, i32) {
        match self {
            SceneOrigin::Corner => (0, 0),
            SceneOrigin::Center => ((width / 2) as i32, (height / 2) as i32),
        }
    }
}

/// Outcome of a scene load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneLoadReport {
    /// Cells written to the grid
    pub placed: usize,
    /// Cells with unknown codes, written as stone
    pub substituted: usize,
    /// Cells outside the grid, dropped
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_offset() {
        assert_eq!(SceneOrigin::Corner.offset(180, 180), (0, 0));
        assert_eq!(SceneOrigin::Center.offset(180, 180), (90, 90));
        assert_eq!(SceneOrigin::Center.offset(11, 7), (5, 3));
    }

    #[test]
    fn test_scene_cell_ron() {
        let cells: Vec<SceneCell> =
            ron::from_str("[(x: -3, y: 4, code: 1), (x: 0, y: 0, code: 9)]").unwrap();
        assert_eq!(cells, vec![SceneCell::new(-3, 4, 1), SceneCell::new(0, 0, 9)]);
    }
}
