use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::color::ColorTag;

/// Integer cell coordinate. `y` is the vertical (stack) axis.
pub type GridCoord = IVec3;

/// One occupied cell, in the shape it takes inside project files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub color: ColorTag,
}

impl VoxelCell {
    pub fn new(coord: GridCoord, color: ColorTag) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
            z: coord.z,
            color,
        }
    }

    pub fn coord(&self) -> GridCoord {
        IVec3::new(self.x, self.y, self.z)
    }
}
