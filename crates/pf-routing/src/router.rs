//! Routing service trait and an in-memory taxi table.
//!
//! # Pluggability
//!
//! The assembler only talks to [`RoutingService`], so a server can back it
//! with whatever data store it loads its taxi tables from.  [`TaxiTable`] is
//! the default in-memory implementation used by tests and the demo.

use std::collections::HashMap;

use pf_core::{LegId, WaypointId};

use crate::{LegNode, LegRoute};

// ── RoutingService trait ──────────────────────────────────────────────────────

/// Read-only routing data consumed by [`assemble`][crate::assemble].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: routing tables are built once and
/// read by many entities, possibly from several simulation threads.
pub trait RoutingService: Send + Sync {
    /// The leg that connects two itinerary waypoints, or `None` when the
    /// pair is not connected.
    fn route(&self, from: WaypointId, to: WaypointId) -> Option<LegRoute>;

    /// Ordered nodes of `leg`.  Unknown legs yield an empty slice.
    fn leg_nodes(&self, leg: LegId) -> &[LegNode];

    /// Highest leg id the service knows about.
    fn max_leg_id(&self) -> LegId;
}

// ── TaxiTable ─────────────────────────────────────────────────────────────────

/// In-memory routing table: waypoint pairs → legs, legs → node lists.
#[derive(Debug, Default)]
pub struct TaxiTable {
    routes: HashMap<(WaypointId, WaypointId), LegRoute>,
    legs:   HashMap<LegId, Vec<LegNode>>,
    max_leg: Option<LegId>,
}

impl TaxiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `leg` as the route from `from` to `to`.
    ///
    /// Node `leg` and `index` fields are rewritten to match their position,
    /// so callers can build them with placeholder values.
    pub fn add_leg(
        &mut self,
        from:  WaypointId,
        to:    WaypointId,
        leg:   LegId,
        cost:  u32,
        nodes: Vec<LegNode>,
    ) {
        let nodes = nodes
            .into_iter()
            .enumerate()
            .map(|(i, mut n)| {
                n.leg   = leg;
                n.index = i as u32;
                n
            })
            .collect();
        self.routes.insert((from, to), LegRoute { leg, cost });
        self.legs.insert(leg, nodes);
        self.max_leg = Some(self.max_leg.map_or(leg, |m| m.max(leg)));
    }

    /// Register a route whose leg id has no node data (used to model stale
    /// routing rows).
    pub fn add_route(&mut self, from: WaypointId, to: WaypointId, route: LegRoute) {
        self.routes.insert((from, to), route);
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

impl RoutingService for TaxiTable {
    fn route(&self, from: WaypointId, to: WaypointId) -> Option<LegRoute> {
        self.routes.get(&(from, to)).copied()
    }

    fn leg_nodes(&self, leg: LegId) -> &[LegNode] {
        self.legs.get(&leg).map(Vec::as_slice).unwrap_or(&[])
    }

    fn max_leg_id(&self) -> LegId {
        self.max_leg.unwrap_or(LegId(0))
    }
}
