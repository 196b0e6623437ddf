use std::path::PathBuf;

use blockwright_persist::PersistError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\n{usage}", usage = crate::args::USAGE)]
    Usage(String),

    #[error("invalid value '{value}' for {flag}")]
    BadValue { flag: &'static str, value: String },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("no polyhedron with id '{0}'")]
    UnknownPolyhedron(String),

    #[error("the project has no polyhedrons to render")]
    NothingToRender,
}
