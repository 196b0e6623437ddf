//! Pointer picking: hovered cube face first, ground cell as fallback.

use std::cmp::Ordering;

use blockwright_core::constants::{PICK_RADIUS_FACTOR, PICK_TIE_MARGIN_PX};
use blockwright_core::face::{Face, ALL_FACES};
use blockwright_core::types::GridCoord;
use blockwright_core::view::{ViewState, Viewport};
use blockwright_grid::VoxelGrid;
use glam::{IVec3, Vec2, Vec3};

use crate::geometry::FaceQuad;
use crate::projector::Projector;

/// A cube face under the pointer and the cell a placement against it would fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCandidate {
    /// `source + normal`
    pub target: GridCoord,
    pub source: GridCoord,
    pub normal: IVec3,
    pub face: Face,
    pub screen_distance: f32,
    pub facing_camera: bool,
    pub depth: f32,
}

impl FaceCandidate {
    /// Total order where `Less` means "preferred": facing the camera first,
    /// then the closer 5 px distance bucket, then nearer the viewer. Cell and
    /// face break exact ties so the choice never depends on iteration order.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        other
            .facing_camera
            .cmp(&self.facing_camera)
            .then_with(|| self.distance_bucket().cmp(&other.distance_bucket()))
            .then_with(|| other.depth.total_cmp(&self.depth))
            .then_with(|| self.source.to_array().cmp(&other.source.to_array()))
            .then_with(|| (self.face as u8).cmp(&(other.face as u8)))
    }

    fn distance_bucket(&self) -> i64 {
        (self.screen_distance / PICK_TIE_MARGIN_PX).floor() as i64
    }
}

/// Result of a pick query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickTarget {
    Face(FaceCandidate),
    Ground { x: i32, z: i32 },
}

pub struct PickEngine<'a> {
    grid: &'a VoxelGrid,
    projector: Projector,
    view_dir: Vec3,
}

impl<'a> PickEngine<'a> {
    pub fn new(grid: &'a VoxelGrid, view: &ViewState, viewport: Viewport) -> Self {
        Self {
            grid,
            projector: Projector::new(view, viewport),
            view_dir: view.view_direction(),
        }
    }

    /// Every face currently eligible under `pointer`, unordered.
    ///
    /// Faces that are strongly back-facing, whose neighbor cell is already
    /// occupied, or whose neighbor lies outside the height range are skipped.
    pub fn candidates(&self, pointer: Vec2) -> impl Iterator<Item = FaceCandidate> + '_ {
        let config = self.grid.config();
        self.grid
            .iter()
            .flat_map(|(cell, _)| ALL_FACES.map(move |face| (cell, face)))
            .filter(move |(cell, face)| {
                let target = *cell + face.normal();
                config.in_height(target.y) && !self.grid.is_occupied(target)
            })
            .filter_map(move |(cell, face)| {
                let quad = FaceQuad::build(&self.projector, self.view_dir, cell, face, Default::default());
                if quad.is_back_facing() {
                    return None;
                }
                let size = quad.screen_size();
                let radius = PICK_RADIUS_FACTOR * (size.x + size.y) / 2.0;
                let distance = pointer.distance(quad.centroid());
                (distance < radius).then(|| FaceCandidate {
                    target: cell + face.normal(),
                    source: cell,
                    normal: face.normal(),
                    face,
                    screen_distance: distance,
                    facing_camera: quad.facing_camera(),
                    depth: quad.depth,
                })
            })
    }

    /// The preferred face under `pointer`, if any.
    pub fn pick_face(&self, pointer: Vec2) -> Option<FaceCandidate> {
        self.candidates(pointer).min_by(FaceCandidate::priority_cmp)
    }

    /// Ground cell under `pointer`, if it resolves inside the footprint.
    pub fn pick_ground(&self, pointer: Vec2) -> Option<(i32, i32)> {
        let (x, z) = self.projector.screen_to_ground(pointer)?;
        self.grid.config().in_footprint(x, z).then_some((x, z))
    }

    /// Face-hover test, then ground fallback.
    pub fn pick(&self, pointer: Vec2) -> Option<PickTarget> {
        if let Some(face) = self.pick_face(pointer) {
            return Some(PickTarget::Face(face));
        }
        self.pick_ground(pointer).map(|(x, z)| PickTarget::Ground { x, z })
    }
}
