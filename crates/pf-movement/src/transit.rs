//! Multi-leg transit over an [`AssembledPath`].
//!
//! The motion driver flies the spline and reports the index of the last
//! point it reached.  Each tick the controller catches up to that index one
//! half-step at a time:
//!
//! ```text
//! Departure(n) ──► Arrival(n+1) ──► Departure(n+1) ──► …
//! ```
//!
//! A departure fires node `n`'s departure trigger and moves `current_node`
//! on; an arrival fires the new node's arrival trigger.  Both halves settle
//! any leg boundary the controller has now reached (itinerary step, cost).

use std::collections::VecDeque;

use pf_core::{MapId, MovementConfig, MovementKind};
use pf_motion::{MovementController, SplineRequest, TransitHost};
use pf_routing::{AssembledPath, Boundary};

/// Which half of a node-to-node hop the event loop is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EventHalf {
    #[default]
    Departure,
    Arrival,
}

/// Where a transit ends, and when to start loading it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitDestination {
    pub map:           MapId,
    pub x:             f32,
    pub y:             f32,
    /// Node at which the destination area is preloaded.  `None` when the
    /// path is shorter than the lookahead and nothing is preloaded.
    pub prefetch_node: Option<usize>,
}

/// Drives one entity along an assembled multi-leg path.
#[derive(Debug)]
pub struct TransitController {
    path:         AssembledPath,
    config:       MovementConfig,
    current_node: usize,
    boundaries:   VecDeque<Boundary>,
    destination:  Option<TransitDestination>,
    half:         EventHalf,
    prefetched:   bool,
}

impl TransitController {
    /// Start (or resume) a transit at `start_node`, clamped to the path.
    ///
    /// Resuming past node 0 means the entity already stands on `start_node`,
    /// so boundaries up to and including it belong to legs already flown
    /// and are dropped without charging.
    pub fn new(path: AssembledPath, start_node: usize) -> Self {
        let current_node = start_node.min(path.len().saturating_sub(1));
        let boundaries = path
            .boundaries()
            .iter()
            .copied()
            .filter(|b| current_node == 0 || b.index > current_node)
            .collect();
        let config = MovementConfig::default();
        let destination = destination_of(&path, config.prefetch_lookahead);
        Self {
            path,
            config,
            current_node,
            boundaries,
            destination,
            half: EventHalf::Departure,
            prefetched: false,
        }
    }

    pub fn with_config(mut self, config: MovementConfig) -> Self {
        self.destination = destination_of(&self.path, config.prefetch_lookahead);
        self.config      = config;
        self
    }

    pub fn path(&self) -> &AssembledPath {
        &self.path
    }

    pub fn current_node(&self) -> usize {
        self.current_node
    }

    pub fn destination(&self) -> Option<TransitDestination> {
        self.destination
    }

    /// Boundaries not yet reached.
    pub fn pending_boundaries(&self) -> impl Iterator<Item = &Boundary> {
        self.boundaries.iter()
    }

    /// `true` while `current_node` is the final node, or for an empty path.
    ///
    /// This tracks position only.  [`skip_to_node`](Self::skip_to_node) can
    /// land on the final node without its arrival event firing and with its
    /// boundary still pending, so it does not mean the transit completed.
    pub fn has_arrived(&self) -> bool {
        self.current_node + 1 >= self.path.len()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Launch the flight and return where it ends.  `None` for an empty
    /// path, which never moves.
    pub fn initialize<H: TransitHost>(&mut self, host: &mut H) -> Option<TransitDestination> {
        self.launch(host);
        self.destination
    }

    /// Re-launch from `current_node`, e.g. after a teleport.
    pub fn reset<H: TransitHost>(&mut self, host: &mut H) {
        self.launch(host);
    }

    /// Catch up with the driver's progress.  Returns `false` once the final
    /// node is reached.
    pub fn update<H: TransitHost>(&mut self, host: &mut H, _diff_ms: u32) -> bool {
        let Some(last) = self.path.len().checked_sub(1) else {
            return false;
        };
        let reported = host.current_point().min(last);

        if reported > self.current_node {
            self.half = EventHalf::Departure;
            loop {
                self.fire_event(host);
                self.settle_boundaries(host);
                if self.current_node == reported {
                    break;
                }
                self.maybe_prefetch(host);
                self.half = match self.half {
                    EventHalf::Departure => {
                        self.current_node += 1;
                        EventHalf::Arrival
                    }
                    EventHalf::Arrival => EventHalf::Departure,
                };
            }
        }

        self.current_node < last
    }

    pub fn finalize<H: TransitHost>(&mut self, host: &mut H) {
        if self.path.is_empty() {
            return;
        }
        host.leave_transit();
        if host.itinerary_consumed() {
            host.settle_on_ground();
        }
    }

    // ── Position overrides ────────────────────────────────────────────────

    /// Jump to `index` (clamped to the last node).  Takes effect on the next
    /// launch.
    pub fn skip_to_node(&mut self, index: usize) {
        self.current_node = index.min(self.path.len().saturating_sub(1));
    }

    pub fn skip_current_node(&mut self) {
        self.skip_to_node(self.current_node + 1);
    }

    /// The entity was teleported mid-transit.  Resynchronize to the first
    /// node on a different map after the current one.  Returns whether a
    /// jump happened.
    pub fn notify_external_relocation(&mut self) -> bool {
        let end = self.path.map_run_end(self.current_node);
        if end < self.path.len() {
            self.current_node = end;
            true
        } else {
            false
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn launch<H: TransitHost>(&mut self, host: &mut H) {
        if self.path.is_empty() {
            return;
        }
        host.enter_transit();

        // The driver cannot interpolate across maps; fly the current map only.
        let end = self.path.map_run_end(self.current_node);
        let points = self.path.nodes()[self.current_node..end]
            .iter()
            .map(|n| n.position)
            .collect();
        match SplineRequest::flight(points, self.current_node, self.config.transit_velocity) {
            Ok(spline) => host.launch_spline(spline),
            Err(e) => log::error!("transit launch at node {} failed: {e}", self.current_node),
        }
    }

    fn fire_event<H: TransitHost>(&self, host: &mut H) {
        let Some(node) = self.path.nodes().get(self.current_node) else {
            return;
        };
        let trigger = match self.half {
            EventHalf::Departure => node.departure_trigger,
            EventHalf::Arrival   => node.arrival_trigger,
        };
        if let Some(trigger) = trigger {
            log::debug!("transit node {} {:?}: firing {trigger}", self.current_node, self.half);
            host.fire_path_trigger(trigger);
        }
    }

    fn settle_boundaries<H: TransitHost>(&mut self, host: &mut H) {
        while let Some(boundary) = self.boundaries.front().copied() {
            if boundary.index > self.current_node {
                break;
            }
            self.boundaries.pop_front();
            host.advance_itinerary();
            host.deduct(boundary.cost);
            host.record_spend(boundary.cost);
        }
    }

    fn maybe_prefetch<H: TransitHost>(&mut self, host: &mut H) {
        let Some(dest) = self.destination else {
            return;
        };
        if self.prefetched || dest.prefetch_node != Some(self.current_node) {
            return;
        }
        self.prefetched = true;
        log::info!(
            "preloading {} around ({:.1}, {:.1}) at node {}",
            dest.map, dest.x, dest.y, self.current_node
        );
        host.preload(dest.map, dest.x, dest.y);
    }
}

fn destination_of(path: &AssembledPath, lookahead: usize) -> Option<TransitDestination> {
    let last = path.nodes().last()?;
    Some(TransitDestination {
        map:           last.map,
        x:             last.position.x,
        y:             last.position.y,
        prefetch_node: path.len().checked_sub(lookahead),
    })
}

impl<H: TransitHost> MovementController<H> for TransitController {
    fn kind(&self) -> MovementKind {
        MovementKind::Transit
    }

    fn initialize(&mut self, host: &mut H) {
        TransitController::initialize(self, host);
    }

    fn reset(&mut self, host: &mut H) {
        TransitController::reset(self, host);
    }

    fn update(&mut self, host: &mut H, diff_ms: u32) -> bool {
        TransitController::update(self, host, diff_ms)
    }

    fn finalize(&mut self, host: &mut H) {
        TransitController::finalize(self, host);
    }

    fn on_relocated(&mut self, _host: &mut H) {
        self.notify_external_relocation();
    }
}
