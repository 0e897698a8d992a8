//! Grid - fixed-size store of material cells

use thiserror::Error;

use crate::simulation::Material;

/// Failure to allocate a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroSize { width: u32, height: u32 },

    #[error("grid dimensions must be at most {max} per side (got {width}x{height})")]
    TooLarge { width: u32, height: u32, max: u32 },
}

/// A single cell that differs between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: u32,
    pub y: u32,
    pub material: Material,
}

/// Fixed width x height array of materials, allocated once and never resized.
///
/// Row-major, index = y * width + x. Row 0 is the bottom row, so "down" is y - 1.
/// All index math stays inside this type; everything else goes through
/// bounds-checked coordinates.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Material>,
}

impl Grid {
    /// Largest allowed side. Cell coordinates are `i32`, and every
    /// in-grid coordinate plus a one-cell neighbour offset must fit.
    pub const MAX_DIMENSION: u32 = 1 << 14;

    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSize { width, height });
        }
        if width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION {
            return Err(GridError::TooLarge {
                width,
                height,
                max: Self::MAX_DIMENSION,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Material::Empty; width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Flat index for in-bounds coordinates
    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Material at (x, y), or `None` outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Material> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write a material at (x, y). Out-of-bounds writes are ignored and return false.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, material: Material) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = material;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn get_index(&self, index: usize) -> Material {
        self.cells[index]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, index: usize, material: Material) {
        self.cells[index] = material;
    }

    #[inline]
    pub(crate) fn swap_index(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    pub fn fill(&mut self, material: Material) {
        self.cells.fill(material);
    }

    pub fn clear(&mut self) {
        self.fill(Material::Empty);
    }

    /// Number of cells holding `material`
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    /// Number of non-empty cells (the "active cell count")
    pub fn count_non_empty(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Row-major byte snapshot of every cell
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|m| m.code()).collect()
    }

    /// Iterate all cells as (x, y, material), bottom row first
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Material)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| ((i % width) as u32, (i / width) as u32, m))
    }

    /// Cells that differ from an earlier [`Grid::codes`] snapshot.
    ///
    /// A snapshot of the wrong length is treated as entirely stale.
    pub fn diff(&self, previous: &[u8]) -> Vec<CellChange> {
        let stale = previous.len() != self.cells.len();
        self.iter()
            .enumerate()
            .filter(|&(i, (_, _, m))| stale || previous[i] != m.code())
            .map(|(_, (x, y, material))| CellChange { x, y, material })
            .collect()
    }
}
