//! Framework error type.
//!
//! Sub-crates define their own error enums (`PathError`, `RoutingError`,
//! `SimError`) and wrap `PfError` where they validate core configuration.
//! Controllers never surface errors from `update`; they log and degrade
//! instead.

use thiserror::Error;

/// The top-level error type for `pf-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PfError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pf-core` operations.
pub type PfResult<T> = Result<T, PfError>;
