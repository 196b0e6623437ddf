//! Single source of truth for shared constants.
//! The editor, renderer, picker and file validation all read from here.

/// Pixels per grid unit at zoom 1.0.
pub const UNIT_SIZE: f32 = 30.0;

/// Half the side length of a voxel cube in grid units.
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Default yaw in degrees (canonical reset view).
pub const DEFAULT_YAW_DEG: f32 = 45.0;

/// Default pitch in degrees (canonical reset view).
pub const DEFAULT_PITCH_DEG: f32 = 30.0;

/// Pitch clamp, in degrees. Keeps the camera off the poles.
pub const PITCH_MIN_DEG: f32 = -80.0;
pub const PITCH_MAX_DEG: f32 = 80.0;

/// Zoom clamp.
pub const ZOOM_MIN: f32 = 0.2;
pub const ZOOM_MAX: f32 = 5.0;

/// Multiplicative zoom factor applied per wheel notch.
pub const ZOOM_STEP: f32 = 1.1;

/// Degrees of rotation per pixel of drag.
pub const ROTATE_DEG_PER_PIXEL: f32 = 0.5;

/// Degrees of yaw per arrow-key press.
pub const KEY_ROTATE_STEP_DEG: f32 = 5.0;

/// Smallest |sin(pitch)| the ground inverse will divide by.
pub const GROUND_EPSILON: f32 = 1e-3;

/// Faces with normal·view above this are strongly back-facing.
pub const BACK_FACING_DOT: f32 = 0.5;

/// A face is hovered when the pointer is within this fraction of its average screen size.
pub const PICK_RADIUS_FACTOR: f32 = 0.7;

/// Width (pixels) of the screen-distance bands pick candidates are ranked by.
pub const PICK_TIE_MARGIN_PX: f32 = 5.0;

/// Lighten percentage for top faces.
pub const TOP_LIGHTEN_PCT: f32 = 20.0;

/// Darken percentage for bottom faces.
pub const BOTTOM_DARKEN_PCT: f32 = 30.0;

/// Maximum darken percentage for an edge-on side face.
pub const SIDE_DARKEN_MAX_PCT: f32 = 15.0;

/// Alpha of the placement preview cube.
pub const PREVIEW_ALPHA: f32 = 0.5;

/// Default footprint (cells per side, centered at the origin).
pub const DEFAULT_FOOTPRINT: u32 = 10;

/// Default maximum stack height.
pub const DEFAULT_GRID_HEIGHT: u32 = 5;

/// Largest footprint accepted from settings or project files.
pub const MAX_FOOTPRINT: u32 = 64;

/// Largest stack height accepted from settings or project files.
pub const MAX_GRID_HEIGHT: u32 = 32;

/// Default build color.
pub const DEFAULT_COLOR: &str = "#ff6b6b";
