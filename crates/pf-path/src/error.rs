use pf_core::PathId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("path {0} not found")]
    PathNotFound(PathId),

    #[error("path {0} has no nodes")]
    EmptyPath(PathId),

    #[error("path parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PathResult<T> = Result<T, PathError>;
