use pf_path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("no path given and the entity has no default path")]
    NoPathAssigned,

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type MovementResult<T> = Result<T, MovementError>;
