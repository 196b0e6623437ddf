pub mod compat;
pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::{ProjectFile, PolyhedronRecord, Timestamp, FORMAT_VERSION};
pub use load::{import_project, ProjectData};
pub use save::{export_file_name, export_project};
