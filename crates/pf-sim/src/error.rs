use pf_core::{EntityId, PfError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] PfError),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
}

pub type SimResult<T> = Result<T, SimError>;
