//! Shared types for the Blockwright voxel editor: grid coordinates, cells,
//! colors, cube faces and the view state every other crate reads.

pub mod color;
pub mod constants;
pub mod error;
pub mod face;
pub mod types;
pub mod view;

pub use color::{ColorTag, Rgb};
pub use error::{ColorError, EditError};
pub use face::{Face, ALL_FACES};
pub use types::{GridCoord, VoxelCell};
pub use view::{ViewState, Viewport};
