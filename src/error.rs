use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjectInfoError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid pattern: {0}")]
    Pattern(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Serialization failed: {0}")]
    Serialize(String),
}
impl ProjectInfoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjectInfoError::Io {
            path: path.into(),
            source,
        }
    }
}
