//! Multi-leg path assembly.
//!
//! A transit itinerary is a list of coarse waypoints.  Each consecutive pair
//! maps to one routed leg; [`assemble`] stitches the legs' node lists into a
//! single traversal-ready [`AssembledPath`].
//!
//! # Seam pruning
//!
//! Adjacent legs are authored independently and usually both contain a node
//! at (nearly) the shared waypoint.  Flying both produces a visible wobble,
//! so nodes near a seam are pruned:
//!
//! - every leg but the first drops its first `lead_in_nodes` nodes and any
//!   node still close to its own start;
//! - every leg but the last drops its final node and any node close to it;
//! - until a leg has accepted its first node, a candidate that lands close to
//!   the previously accepted node is dropped *and* that previous node is
//!   removed too, pulling the previous leg's boundary back by one.
//!
//! "Close" means same map and planar distance ≤ `prune_distance`.  A node on
//! another map is never close.  The very first and very last node of the
//! itinerary are always kept.

use std::collections::VecDeque;

use pf_core::{AssemblyConfig, MapId, WaypointId};

use crate::{LegNode, LegRoute, RoutingError, RoutingResult, RoutingService};

// ── Boundary ──────────────────────────────────────────────────────────────────

/// Where one leg's contribution ends inside an [`AssembledPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    /// Index of the leg's final accepted node.
    pub index:           usize,
    /// Discounted price of this leg alone.
    pub cost:            u64,
    /// Discounted price of every leg up to and including this one.
    pub cumulative_cost: u64,
}

// ── AssembledPath ─────────────────────────────────────────────────────────────

/// The stitched node sequence for one transit, plus its leg boundaries.
///
/// Boundary indices are strictly increasing and always index into `nodes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledPath {
    nodes:      Vec<LegNode>,
    boundaries: Vec<Boundary>,
    truncation: Option<RoutingError>,
    unbilled:   u64,
}

impl AssembledPath {
    /// Build a path directly, bypassing pruning.  Boundaries that do not
    /// index into `nodes` or that fail to increase are discarded.
    pub fn from_parts(nodes: Vec<LegNode>, boundaries: Vec<Boundary>) -> Self {
        let mut kept: Vec<Boundary> = Vec::with_capacity(boundaries.len());
        for b in boundaries {
            let increasing = kept.last().is_none_or(|prev| b.index > prev.index);
            if b.index < nodes.len() && increasing {
                kept.push(b);
            }
        }
        Self { nodes, boundaries: kept, truncation: None, unbilled: 0 }
    }

    #[inline]
    pub fn nodes(&self) -> &[LegNode] {
        &self.nodes
    }

    #[inline]
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of every assembled leg's discounted cost, including any
    /// [`unbilled_cost`](Self::unbilled_cost).
    pub fn total_cost(&self) -> u64 {
        self.boundaries.last().map_or(0, |b| b.cumulative_cost) + self.unbilled
    }

    /// Cost of legs that were routed but left no node to charge them at.
    /// Only ever nonzero on a path whose seams pruned every node away.
    pub fn unbilled_cost(&self) -> u64 {
        self.unbilled
    }

    /// `false` when assembly stopped early on bad routing data.
    pub fn is_complete(&self) -> bool {
        self.truncation.is_none()
    }

    /// Why assembly stopped early, if it did.
    pub fn truncation(&self) -> Option<&RoutingError> {
        self.truncation.as_ref()
    }

    /// Map of the node at `index`.
    pub fn map_at(&self, index: usize) -> Option<MapId> {
        self.nodes.get(index).map(|n| n.map)
    }

    /// End (exclusive) of the contiguous run of nodes starting at `from`
    /// that share `from`'s map.  Returns `len()` when `from` is past the end.
    pub fn map_run_end(&self, from: usize) -> usize {
        let Some(map) = self.map_at(from) else {
            return self.nodes.len();
        };
        self.nodes[from..]
            .iter()
            .position(|n| n.map != map)
            .map_or(self.nodes.len(), |offset| from + offset)
    }

    /// Copy of the boundary list as a queue, front = next leg to finish.
    pub fn boundary_queue(&self) -> VecDeque<Boundary> {
        self.boundaries.iter().copied().collect()
    }

    // ── Assembly internals ────────────────────────────────────────────────

    /// Drop the previous leg's trailing node after a junction duplicate and
    /// pull the last boundary back with it.  A boundary that collapses onto
    /// an earlier one absorbs that leg's cost so indices stay increasing.
    ///
    /// Returns the cost released when the path empties and no boundary is
    /// left to hold it.
    fn drop_tail(&mut self) -> u64 {
        if self.nodes.pop().is_none() {
            return 0;
        }
        if self.nodes.is_empty() {
            let released: u64 = self.boundaries.drain(..).map(|b| b.cost).sum();
            log::warn!("seam pruning emptied the path; {released} of cost moves to the next leg");
            return released;
        }
        let Some(mut last) = self.boundaries.pop() else {
            return 0;
        };
        let tail = self.nodes.len().saturating_sub(1);
        last.index = last.index.saturating_sub(1).min(tail);
        while self.boundaries.last().is_some_and(|prev| prev.index >= last.index) {
            if let Some(prev) = self.boundaries.pop() {
                last.cost += prev.cost;
            }
        }
        self.boundaries.push(last);
        0
    }

    /// Close a leg.  Returns `false` when there is no node to anchor the
    /// boundary on yet, in which case the caller carries the cost forward.
    fn close_leg(&mut self, cost: u64, cumulative_cost: u64) -> bool {
        let Some(index) = self.nodes.len().checked_sub(1) else {
            return false;
        };
        match self.boundaries.last_mut() {
            Some(prev) if prev.index >= index => {
                log::warn!(
                    "leg ending at node {index} added no nodes; folding its cost into the boundary at {}",
                    prev.index
                );
                prev.index = index;
                prev.cost += cost;
                prev.cumulative_cost = cumulative_cost;
            }
            _ => self.boundaries.push(Boundary { index, cost, cumulative_cost }),
        }
        true
    }

    /// Account for cost still carried when assembly ends.  It can only be
    /// left over when no node survived, so it is recorded as unbilled.
    fn settle(&mut self, carried: u64, cumulative: u64) {
        if carried == 0 {
            return;
        }
        match self.boundaries.last_mut() {
            Some(last) => {
                last.cost += carried;
                last.cumulative_cost = cumulative;
            }
            None => {
                log::warn!("assembled path has no nodes; {carried} of leg cost cannot be charged");
                self.unbilled += carried;
            }
        }
    }
}

// ── assemble ──────────────────────────────────────────────────────────────────

/// Stitch the legs of `itinerary` into one path.
///
/// `discount` scales every leg's cost (reputation discounts and the like);
/// the scaled cost is rounded up.  The function is pure: the same inputs
/// always produce the same path.
///
/// Bad routing data (no route, or a leg id past
/// [`RoutingService::max_leg_id`]) is logged and ends assembly; the returned
/// path holds what was assembled so far and reports the reason through
/// [`AssembledPath::truncation`].
pub fn assemble<R: RoutingService + ?Sized>(
    itinerary: &[WaypointId],
    routing:   &R,
    discount:  f32,
    config:    &AssemblyConfig,
) -> AssembledPath {
    let mut path = AssembledPath::default();
    let limit_sq = config.prune_distance_sq();
    let last_hop = itinerary.len().saturating_sub(2);

    let mut cumulative = 0u64;
    let mut carried    = 0u64;

    for (hop, pair) in itinerary.windows(2).enumerate() {
        let route = match fetch_leg(routing, pair[0], pair[1]) {
            Ok(route) => route,
            Err(e) => {
                log::error!("path assembly stopped at hop {hop}: {e}");
                path.truncation = Some(e);
                path.settle(carried, cumulative);
                return path;
            }
        };

        carried += splice_leg(
            &mut path,
            routing.leg_nodes(route.leg),
            hop == 0,
            hop == last_hop,
            limit_sq,
            config.lead_in_nodes,
        );

        let leg_cost = discounted(route.cost, discount);
        cumulative += leg_cost;
        carried    += leg_cost;
        if path.close_leg(carried, cumulative) {
            carried = 0;
        } else {
            log::warn!("leg {} contributed no nodes; carrying its cost forward", route.leg);
        }
    }

    path.settle(carried, cumulative);
    path
}

fn fetch_leg<R: RoutingService + ?Sized>(
    routing: &R,
    from:    WaypointId,
    to:      WaypointId,
) -> RoutingResult<LegRoute> {
    let route = routing.route(from, to).ok_or(RoutingError::NoRoute { from, to })?;
    let max = routing.max_leg_id();
    if route.leg > max {
        return Err(RoutingError::LegOutOfRange { leg: route.leg, max });
    }
    Ok(route)
}

#[inline]
fn discounted(cost: u32, discount: f32) -> u64 {
    (cost as f64 * discount.max(0.0) as f64).ceil() as u64
}

/// Fold one leg's nodes into `path`, applying the seam rules.  Returns the
/// cost of earlier legs whose boundaries were pruned away with their nodes.
fn splice_leg(
    path:      &mut AssembledPath,
    nodes:     &[LegNode],
    first_leg: bool,
    last_leg:  bool,
    limit_sq:  f32,
    lead_in:   usize,
) -> u64 {
    let (Some(start), Some(end)) = (nodes.first(), nodes.last()) else {
        return 0;
    };
    let last_index = nodes.len() - 1;
    let mut accepted_in_leg = false;
    let mut released = 0u64;

    for (i, candidate) in nodes.iter().enumerate() {
        let continues = accepted_in_leg
            || first_leg
            || path
                .nodes
                .last()
                .is_none_or(|prev| prev.is_distinct_from(candidate, limit_sq));

        if !continues {
            released += path.drop_tail();
            continue;
        }

        let clear_of_start = first_leg || (start.is_distinct_from(candidate, limit_sq) && i >= lead_in);
        let clear_of_end   = last_leg || (end.is_distinct_from(candidate, limit_sq) && i < last_index);
        if clear_of_start && clear_of_end {
            accepted_in_leg = true;
            path.nodes.push(candidate.clone());
        }
    }
    released
}
