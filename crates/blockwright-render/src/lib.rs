pub mod canvas;
pub mod floor;
pub mod geometry;
pub mod pick;
pub mod projector;
pub mod renderer;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use floor::{floor_lines, FloorLine};
pub use geometry::{cube_faces, shade, FaceQuad};
pub use pick::{FaceCandidate, PickEngine, PickTarget};
pub use projector::{ProjectedPoint, Projector};
pub use renderer::{collect_faces, RenderStyle, Renderer, Scene};
