use blockwright_core::color::ColorTag;
use blockwright_core::error::EditError;
use blockwright_core::types::GridCoord;
use blockwright_grid::VoxelGrid;
use blockwright_render::PickTarget;
use glam::IVec3;

/// Execute the paint tool: recolor the hovered cube, or the top cube of the
/// hovered ground column.
pub fn execute(grid: &mut VoxelGrid, target: &PickTarget, color: ColorTag) -> Result<GridCoord, EditError> {
    let cell = match *target {
        PickTarget::Face(face) => face.source,
        PickTarget::Ground { x, z } => {
            let y = grid.column_top(x, z).ok_or(EditError::EmptyColumn { x, z })?;
            IVec3::new(x, y, z)
        }
    };
    grid.paint(cell, color)?;
    Ok(cell)
}
