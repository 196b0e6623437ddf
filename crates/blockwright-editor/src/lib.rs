//! Host-independent editing session: pointer and key handling, tools,
//! library commands and settings. Browser and CLI hosts drive an
//! [`Editor`] with [`InputEvent`]s and draw it through a canvas.

pub mod editor;
pub mod input;
pub mod settings;
pub mod status;
pub mod tools;

pub use editor::{system_clock, Clock, Editor, EventResponse};
pub use input::{Click, DragDelta, Gesture, InputEvent, Key, PointerButton};
pub use settings::{EditorSettings, SettingsError};
pub use status::Status;
pub use tools::Tool;
