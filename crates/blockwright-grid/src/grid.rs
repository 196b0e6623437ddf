use std::collections::HashMap;

use blockwright_core::color::ColorTag;
use blockwright_core::error::EditError;
use blockwright_core::types::{GridCoord, VoxelCell};
use glam::IVec3;

use crate::config::GridConfig;

/// Sparse voxel storage keyed by cell coordinate.
///
/// Storage itself accepts any key; the placement methods keep every column
/// a contiguous run `0..k` and every cell inside the configured bounds.
#[derive(Debug, Clone, Default)]
pub struct VoxelGrid {
    config: GridConfig,
    cells: HashMap<GridCoord, ColorTag>,
}

impl VoxelGrid {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            cells: HashMap::new(),
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, coord: GridCoord) -> Option<&ColorTag> {
        self.cells.get(&coord)
    }

    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Iterator over all occupied cells.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &ColorTag)> {
        self.cells.iter().map(|(coord, color)| (*coord, color))
    }

    /// Highest occupied `y` in column (x, z), if any.
    pub fn column_top(&self, x: i32, z: i32) -> Option<i32> {
        (0..self.config.max_height() as i32)
            .rev()
            .find(|&y| self.is_occupied(IVec3::new(x, y, z)))
    }

    /// Where `add(x, z)` would put the next cube, or why it cannot.
    pub fn next_in_column(&self, x: i32, z: i32) -> Result<GridCoord, EditError> {
        if !self.config.in_footprint(x, z) {
            return Err(EditError::OutsideFootprint(IVec3::new(x, 0, z)));
        }
        let y = self.column_top(x, z).map_or(0, |top| top + 1);
        if !self.config.in_height(y) {
            return Err(EditError::ColumnFull { x, z });
        }
        Ok(IVec3::new(x, y, z))
    }

    /// Stack a cube on top of column (x, z).
    pub fn add(&mut self, x: i32, z: i32, color: ColorTag) -> Result<GridCoord, EditError> {
        let target = self.next_in_column(x, z)?;
        self.cells.insert(target, color);
        log::debug!("grid: added {target}");
        Ok(target)
    }

    /// Where `add_adjacent(cell, normal)` would put the next cube, or why it cannot.
    pub fn check_adjacent(&self, cell: GridCoord, normal: IVec3) -> Result<GridCoord, EditError> {
        let target = cell + normal;
        if !self.config.in_height(target.y) {
            return Err(EditError::OutOfHeight(target));
        }
        if !self.config.in_footprint(target.x, target.z) {
            return Err(EditError::OutsideFootprint(target));
        }
        if self.is_occupied(target) {
            return Err(EditError::Occupied(target));
        }
        if target.y > 0 && !self.is_occupied(target - IVec3::Y) {
            return Err(EditError::Unsupported(target));
        }
        Ok(target)
    }

    /// Place a cube against the face of `cell` with outward `normal`.
    pub fn add_adjacent(
        &mut self,
        cell: GridCoord,
        normal: IVec3,
        color: ColorTag,
    ) -> Result<GridCoord, EditError> {
        let target = self.check_adjacent(cell, normal)?;
        self.cells.insert(target, color);
        log::debug!("grid: added {target} against {cell}");
        Ok(target)
    }

    /// Remove the topmost cube of column (x, z). Interior cubes are never removed.
    pub fn remove(&mut self, x: i32, z: i32) -> Result<VoxelCell, EditError> {
        let y = self
            .column_top(x, z)
            .ok_or(EditError::EmptyColumn { x, z })?;
        let coord = IVec3::new(x, y, z);
        let color = self
            .cells
            .remove(&coord)
            .ok_or(EditError::NoSuchCell(coord))?;
        log::debug!("grid: removed {coord}");
        Ok(VoxelCell::new(coord, color))
    }

    /// Recolor an existing cube. Leaves the grid untouched when the cell is empty.
    pub fn paint(&mut self, coord: GridCoord, color: ColorTag) -> Result<(), EditError> {
        match self.cells.get_mut(&coord) {
            Some(existing) => {
                *existing = color;
                Ok(())
            }
            None => Err(EditError::NoSuchCell(coord)),
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Change the bounds and purge every cell that falls outside them.
    /// Returns the number of purged cells.
    pub fn set_config(&mut self, config: GridConfig) -> usize {
        self.config = config;
        let before = self.cells.len();
        self.cells.retain(|coord, _| config.contains(*coord));
        let purged = before - self.cells.len();
        if purged > 0 {
            log::info!(
                "grid: resized to {}x{}x{}, purged {} cells",
                config.footprint(),
                config.footprint(),
                config.max_height(),
                purged
            );
        }
        purged
    }

    pub fn set_footprint(&mut self, footprint: u32) -> usize {
        self.set_config(GridConfig::new(footprint, self.config.max_height()))
    }

    pub fn set_max_height(&mut self, max_height: u32) -> usize {
        self.set_config(GridConfig::new(self.config.footprint(), max_height))
    }

    /// Replace the contents wholesale. Cells outside the bounds, and cells
    /// that would float after those are dropped, are skipped.
    /// Returns the number of skipped cells.
    pub fn replace_cells(&mut self, cells: &[VoxelCell]) -> usize {
        self.cells.clear();
        for cell in cells {
            if self.config.contains(cell.coord()) {
                self.cells.insert(cell.coord(), cell.color.clone());
            }
        }
        // Drop anything left hanging, bottom-up so whole runs go at once.
        let mut floating: Vec<GridCoord> = Vec::new();
        for y in 1..self.config.max_height() as i32 {
            floating.clear();
            floating.extend(
                self.cells
                    .keys()
                    .filter(|c| c.y == y && !self.cells.contains_key(&(**c - IVec3::Y)))
                    .copied(),
            );
            for coord in &floating {
                self.cells.remove(coord);
            }
        }
        cells.len() - self.cells.len()
    }

    /// Snapshot of all cells, ordered by (y, x, z) so output is deterministic.
    pub fn to_cells(&self) -> Vec<VoxelCell> {
        let mut cells: Vec<VoxelCell> = self
            .iter()
            .map(|(coord, color)| VoxelCell::new(coord, color.clone()))
            .collect();
        cells.sort_by_key(|c| (c.y, c.x, c.z));
        cells
    }

    /// True when every column is a contiguous run starting at y = 0.
    pub fn is_stacking_valid(&self) -> bool {
        self.cells
            .keys()
            .all(|c| c.y == 0 || self.cells.contains_key(&(*c - IVec3::Y)))
    }
}
