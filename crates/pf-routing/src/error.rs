//! Routing error type.

use thiserror::Error;

use pf_core::{LegId, WaypointId};

/// Data-integrity problems met while assembling a transit path.
///
/// These never abort the caller: [`assemble`][crate::assemble] logs them,
/// stops, and records the error on the partial
/// [`AssembledPath`][crate::AssembledPath].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: WaypointId, to: WaypointId },

    #[error("leg {leg} exceeds the routing table (max {max})")]
    LegOutOfRange { leg: LegId, max: LegId },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
