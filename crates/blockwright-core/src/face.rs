use glam::{IVec3, Vec3};

use crate::constants::CUBE_HALF_EXTENT;

/// One of the 6 faces of a unit cube, named from the cube's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Back = 3,
    Right = 4,
    Left = 5,
}

/// All 6 faces in table order.
pub const ALL_FACES: [Face; 6] = [
    Face::Top,
    Face::Bottom,
    Face::Front,
    Face::Back,
    Face::Right,
    Face::Left,
];

const H: f32 = CUBE_HALF_EXTENT;

/// Outward normals, indexed by `Face as usize`.
const NORMALS: [IVec3; 6] = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
];

/// Corner offsets from the cube center, indexed by `Face as usize`.
/// Every face winds clockwise when viewed from outside the cube.
const CORNERS: [[Vec3; 4]; 6] = [
    // Top
    [
        Vec3::new(-H, H, -H),
        Vec3::new(H, H, -H),
        Vec3::new(H, H, H),
        Vec3::new(-H, H, H),
    ],
    // Bottom
    [
        Vec3::new(-H, -H, H),
        Vec3::new(H, -H, H),
        Vec3::new(H, -H, -H),
        Vec3::new(-H, -H, -H),
    ],
    // Front
    [
        Vec3::new(H, -H, H),
        Vec3::new(-H, -H, H),
        Vec3::new(-H, H, H),
        Vec3::new(H, H, H),
    ],
    // Back
    [
        Vec3::new(-H, -H, -H),
        Vec3::new(H, -H, -H),
        Vec3::new(H, H, -H),
        Vec3::new(-H, H, -H),
    ],
    // Right
    [
        Vec3::new(H, -H, -H),
        Vec3::new(H, -H, H),
        Vec3::new(H, H, H),
        Vec3::new(H, H, -H),
    ],
    // Left
    [
        Vec3::new(-H, -H, H),
        Vec3::new(-H, -H, -H),
        Vec3::new(-H, H, -H),
        Vec3::new(-H, H, H),
    ],
];

impl Face {
    /// Outward unit normal on the integer grid. The neighbor across this face
    /// is `cell + normal()`.
    pub fn normal(self) -> IVec3 {
        NORMALS[self as usize]
    }

    pub fn normal_f32(self) -> Vec3 {
        self.normal().as_vec3()
    }

    /// The 4 corner offsets relative to the cube center.
    pub fn corners(self) -> &'static [Vec3; 4] {
        &CORNERS[self as usize]
    }
}
