//! Tunables for the movement controllers.
//!
//! The pruning constants in [`AssemblyConfig`] were tuned against authored
//! flight data; they are kept as plain fields rather than derived from the
//! geometry.

use crate::{PfError, PfResult};

/// Seam-pruning parameters for the path assembler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssemblyConfig {
    /// Planar distance under which two same-map nodes count as duplicates.
    pub prune_distance: f32,

    /// Leading nodes of every leg after the first that are always dropped.
    pub lead_in_nodes: usize,
}

impl AssemblyConfig {
    #[inline]
    pub fn prune_distance_sq(&self) -> f32 {
        self.prune_distance * self.prune_distance
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self { prune_distance: 40.0, lead_in_nodes: 2 }
    }
}

/// Per-controller movement configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// How long a patrolling entity pauses after something outside the
    /// controller halted it (e.g. a player opened a dialog).
    pub stop_for_interaction_ms: u32,

    /// Spline velocity for transit flights.
    pub transit_velocity: f32,

    /// Destination-area preloading starts this many nodes before the end.
    pub prefetch_lookahead: usize,

    pub assembly: AssemblyConfig,
}

impl MovementConfig {
    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> PfResult<()> {
        if !(self.transit_velocity.is_finite() && self.transit_velocity > 0.0) {
            return Err(PfError::Config(format!(
                "transit_velocity must be positive, got {}",
                self.transit_velocity
            )));
        }
        let prune = self.assembly.prune_distance;
        if prune.is_nan() || prune < 0.0 {
            return Err(PfError::Config(format!(
                "prune_distance must be non-negative, got {prune}"
            )));
        }
        Ok(())
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            stop_for_interaction_ms: 15_000,
            transit_velocity:        30.0,
            prefetch_lookahead:      3,
            assembly:                AssemblyConfig::default(),
        }
    }
}
