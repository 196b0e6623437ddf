use glam::IVec3;

/// Errors that can occur while exporting or importing a project file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("malformed project file: {0}")]
    Json(String),

    #[error("unsupported project format version {0}")]
    UnsupportedVersion(u32),

    #[error("grid size {0} is out of range (1..={1})")]
    GridSizeOutOfRange(u32, u32),

    #[error("grid height {0} is out of range (1..={1})")]
    GridHeightOutOfRange(u32, u32),

    #[error("duplicate polyhedron id '{0}'")]
    DuplicateId(String),

    #[error("polyhedron '{id}' has two cubes at {cell}")]
    DuplicateCube { id: String, cell: IVec3 },

    #[error("polyhedron '{id}' has a cube at {cell} outside the grid")]
    CubeOutOfBounds { id: String, cell: IVec3 },

    #[error("polyhedron '{id}' has a floating cube at {cell}")]
    FloatingCube { id: String, cell: IVec3 },
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Json(e.to_string())
    }
}
