//! Per-cube face quads: projected corners, ordering depth and shaded color.

use blockwright_core::color::Rgb;
use blockwright_core::constants::{
    BACK_FACING_DOT, BOTTOM_DARKEN_PCT, SIDE_DARKEN_MAX_PCT, TOP_LIGHTEN_PCT,
};
use blockwright_core::face::{Face, ALL_FACES};
use blockwright_core::types::GridCoord;
use glam::{Vec2, Vec3};

use crate::projector::Projector;

/// One projected face of one cube, ready to draw or hit-test.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceQuad {
    pub cell: GridCoord,
    pub face: Face,
    pub points: [Vec2; 4],
    /// Average corner depth. Larger is nearer.
    pub depth: f32,
    /// `normal · view_direction`. Negative faces the camera.
    pub dot: f32,
    pub color: Rgb,
}

impl FaceQuad {
    pub fn build(projector: &Projector, view_dir: Vec3, cell: GridCoord, face: Face, base: Rgb) -> Self {
        let center = cell.as_vec3();
        let mut points = [Vec2::ZERO; 4];
        let mut depth = 0.0;
        for (out, corner) in points.iter_mut().zip(face.corners()) {
            let projected = projector.project(center + *corner);
            *out = projected.screen;
            depth += projected.depth;
        }
        let dot = face.normal_f32().dot(view_dir);
        Self {
            cell,
            face,
            points,
            depth: depth / 4.0,
            dot,
            color: shade(base, face, dot),
        }
    }

    pub fn facing_camera(&self) -> bool {
        self.dot < 0.0
    }

    /// Strongly back-facing faces are still drawn but never picked.
    pub fn is_back_facing(&self) -> bool {
        self.dot > BACK_FACING_DOT
    }

    pub fn centroid(&self) -> Vec2 {
        self.points.iter().copied().sum::<Vec2>() / 4.0
    }

    /// Approximate on-screen extent: (width, height) summed over the first
    /// two edges.
    pub fn screen_size(&self) -> Vec2 {
        let [p0, p1, p2, _] = self.points;
        Vec2::new(
            (p1.x - p0.x).abs() + (p2.x - p1.x).abs(),
            (p2.y - p1.y).abs() + (p0.y - p1.y).abs(),
        )
    }
}

/// Shaded color of a face. Tops are lightened, bottoms darkened, and sides
/// darken the more edge-on they are to the camera.
pub fn shade(base: Rgb, face: Face, dot: f32) -> Rgb {
    match face {
        Face::Top => base.lighten(TOP_LIGHTEN_PCT),
        Face::Bottom => base.darken(BOTTOM_DARKEN_PCT),
        _ => {
            let brightness = dot.abs();
            if brightness > BACK_FACING_DOT {
                base
            } else {
                base.darken((1.0 - brightness) * SIDE_DARKEN_MAX_PCT)
            }
        }
    }
}

/// All 6 faces of the cube at `cell`, in table order.
pub fn cube_faces(projector: &Projector, view_dir: Vec3, cell: GridCoord, base: Rgb) -> [FaceQuad; 6] {
    ALL_FACES.map(|face| FaceQuad::build(projector, view_dir, cell, face, base))
}
