use blockwright_core::error::EditError;
use blockwright_core::types::VoxelCell;
use blockwright_grid::VoxelGrid;
use blockwright_render::PickTarget;

/// Execute the erase tool: remove the top cube of the hovered column.
pub fn execute(grid: &mut VoxelGrid, target: &PickTarget) -> Result<VoxelCell, EditError> {
    let (x, z) = column(target);
    grid.remove(x, z)
}

/// Column (x, z) a pick target refers to.
pub fn column(target: &PickTarget) -> (i32, i32) {
    match *target {
        PickTarget::Face(face) => (face.source.x, face.source.z),
        PickTarget::Ground { x, z } => (x, z),
    }
}
