use glam::IVec3;
use thiserror::Error;

/// A color tag that is not `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have exactly six hex digits")]
    BadLength(String),

    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

/// Rejected edits. The grid is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("column ({x}, {z}) is full")]
    ColumnFull { x: i32, z: i32 },

    #[error("cell {0} is outside the footprint")]
    OutsideFootprint(IVec3),

    #[error("cell {0} is outside the height range")]
    OutOfHeight(IVec3),

    #[error("cell {0} is already occupied")]
    Occupied(IVec3),

    #[error("cell {0} would float")]
    Unsupported(IVec3),

    #[error("no cube at {0}")]
    NoSuchCell(IVec3),

    #[error("column ({x}, {z}) is empty")]
    EmptyColumn { x: i32, z: i32 },

    #[error("nothing to save: the build is empty")]
    EmptyBuild,

    #[error("no polyhedron with id '{0}'")]
    UnknownPolyhedron(String),

    #[error("no polyhedron selected")]
    NoSelection,
}
