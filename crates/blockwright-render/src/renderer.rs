use blockwright_core::color::Rgb;
use blockwright_core::constants::PREVIEW_ALPHA;
use blockwright_core::face::Face;
use blockwright_core::types::{GridCoord, VoxelCell};
use blockwright_core::view::{ViewState, Viewport};
use blockwright_grid::{GridConfig, VoxelGrid};
use glam::Vec3;

use crate::canvas::Canvas;
use crate::floor::floor_lines;
use crate::geometry::{cube_faces, FaceQuad};
use crate::projector::Projector;

/// Colors and line widths of the draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background: Rgb,
    pub outline: Rgb,
    pub outline_width: f32,
    pub floor: Rgb,
    pub highlight: Rgb,
    pub highlight_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Rgb::from_packed(0xf0f0f0),
            outline: Rgb::from_packed(0x333333),
            outline_width: 1.0,
            floor: Rgb::from_packed(0xdddddd),
            highlight: Rgb::from_packed(0x00ff00),
            highlight_width: 3.0,
        }
    }
}

/// Everything one draw pass shows besides the view.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub cells: Vec<(GridCoord, Rgb)>,
    /// Footprint to draw floor lines for, if any.
    pub floor: Option<GridConfig>,
    /// Translucent cube at a prospective placement.
    pub preview: Option<(GridCoord, Rgb)>,
    /// Face to outline, as (cell, face).
    pub highlight: Option<(GridCoord, Face)>,
}

impl Scene {
    pub fn from_grid(grid: &VoxelGrid) -> Self {
        Self {
            cells: grid.iter().map(|(coord, color)| (coord, color.rgb())).collect(),
            ..Default::default()
        }
    }

    pub fn from_cells(cells: &[VoxelCell]) -> Self {
        Self {
            cells: cells.iter().map(|c| (c.coord(), c.color.rgb())).collect(),
            ..Default::default()
        }
    }
}

/// Painter's-algorithm renderer over a [`Canvas`].
///
/// Full redraw on every call; faces of all cubes are sorted together so a
/// neighbor's near faces always overdraw another cube's far faces.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, view: &ViewState, viewport: Viewport, scene: &Scene) {
        let projector = Projector::new(view, viewport);
        let view_dir = view.view_direction();

        canvas.set_alpha(1.0);
        canvas.clear(self.style.background);

        if let Some(config) = &scene.floor {
            for line in floor_lines(config) {
                canvas.line(
                    projector.project(line.from).screen,
                    projector.project(line.to).screen,
                    self.style.floor,
                    1.0,
                );
            }
        }

        let faces = collect_faces(&projector, view_dir, scene.cells.iter().copied());
        for face in &faces {
            self.draw_face(canvas, face);
        }

        if let Some((cell, color)) = scene.preview {
            canvas.set_alpha(PREVIEW_ALPHA);
            for face in &collect_faces(&projector, view_dir, [(cell, color)]) {
                self.draw_face(canvas, face);
            }
            canvas.set_alpha(1.0);
        }

        if let Some((cell, face)) = scene.highlight {
            let quad = FaceQuad::build(&projector, view_dir, cell, face, Rgb::default());
            canvas.stroke_polygon(&quad.points, self.style.highlight, self.style.highlight_width);
        }

        log::trace!("renderer: drew {} faces", faces.len());
    }

    fn draw_face(&self, canvas: &mut dyn Canvas, face: &FaceQuad) {
        canvas.fill_polygon(&face.points, face.color);
        canvas.stroke_polygon(&face.points, self.style.outline, self.style.outline_width);
    }
}

/// Every face of every cell, sorted far to near by average depth.
pub fn collect_faces(
    projector: &Projector,
    view_dir: Vec3,
    cells: impl IntoIterator<Item = (GridCoord, Rgb)>,
) -> Vec<FaceQuad> {
    let mut faces: Vec<FaceQuad> = cells
        .into_iter()
        .flat_map(|(cell, color)| cube_faces(projector, view_dir, cell, color))
        .collect();
    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}
