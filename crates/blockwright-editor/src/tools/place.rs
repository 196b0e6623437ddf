use blockwright_core::color::ColorTag;
use blockwright_core::error::EditError;
use blockwright_core::types::GridCoord;
use blockwright_grid::VoxelGrid;
use blockwright_render::PickTarget;

/// Execute the cube tool: against the hovered face, or on top of the
/// hovered ground column.
pub fn execute(grid: &mut VoxelGrid, target: &PickTarget, color: ColorTag) -> Result<GridCoord, EditError> {
    match *target {
        PickTarget::Face(face) => grid.add_adjacent(face.source, face.normal, color),
        PickTarget::Ground { x, z } => grid.add(x, z, color),
    }
}

/// Where `execute` would put a cube, if it would succeed.
pub fn preview(grid: &VoxelGrid, target: &PickTarget) -> Option<GridCoord> {
    match *target {
        PickTarget::Face(face) => grid.check_adjacent(face.source, face.normal).ok(),
        PickTarget::Ground { x, z } => grid.next_in_column(x, z).ok(),
    }
}
