//! Waypoint patrols over a shared path.
//!
//! # State machine
//!
//! ```text
//!            timer elapsed
//! Stopped ───────────────► IssueMove ──► Moving
//!    ▲                                      │ motion finished
//!    │ node delay / halted                  ▼
//!    └──────────────────────────────── ProcessArrival ──► IssueMove
//! ```
//!
//! "Stopped" is simply a pending [`ResumeTimer`].  A one-shot patrol leaves
//! the machine from IssueMove once the last node's arrival is processed.

use std::sync::Arc;

use pf_core::{MoveStyle, MovementConfig, MovementKind, PathId, Position, ResumeTimer};
use pf_motion::{MoveRequest, MovementController, PatrolHost};
use pf_path::{PathNode, SharedPath, SharedPathStore};

use crate::{MovementError, MovementResult};

/// Drives one entity around a [`SharedPath`].
///
/// The path itself is shared; the controller only holds an `Arc` handle plus
/// its own progress.
#[derive(Debug)]
pub struct WaypointController {
    store:        Arc<SharedPathStore>,
    path_id:      Option<PathId>,
    repeat:       bool,
    config:       MovementConfig,

    /// `None` until initialized, and for good if the path failed to resolve.
    path:         Option<Arc<SharedPath>>,
    current_node: usize,
    /// Arrival at `current_node` has been handled.
    arrived:      bool,
    next_move:    ResumeTimer,
}

impl WaypointController {
    /// `path_id == None` patrols the host's default path.
    pub fn new(store: Arc<SharedPathStore>, path_id: Option<PathId>, repeat: bool) -> Self {
        Self {
            store,
            path_id,
            repeat,
            config:       MovementConfig::default(),
            path:         None,
            current_node: 0,
            arrived:      false,
            next_move:    ResumeTimer::default(),
        }
    }

    pub fn with_config(mut self, config: MovementConfig) -> Self {
        self.config = config;
        self
    }

    /// The path being patrolled, once resolved.
    pub fn path_id(&self) -> Option<PathId> {
        self.path.as_ref().map(|p| p.id).or(self.path_id)
    }

    pub fn repeats(&self) -> bool {
        self.repeat
    }

    pub fn current_node(&self) -> usize {
        self.current_node
    }

    /// Position of the node currently targeted (or last reached).
    pub fn current_position(&self) -> Option<Position> {
        self.path
            .as_ref()
            .and_then(|p| p.get(self.current_node))
            .map(|n| n.position)
    }

    /// `true` when no usable path was resolved; the controller will never
    /// request motion.
    pub fn is_inert(&self) -> bool {
        self.path.as_ref().is_none_or(|p| p.is_empty())
    }

    /// Milliseconds until the next hop while stopped, `0` while moving.
    pub fn remaining_pause_ms(&self) -> u32 {
        self.next_move.remaining_ms()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    pub fn initialize<H: PatrolHost>(&mut self, host: &mut H) {
        let path = match self.resolve_path(host) {
            Ok(path) => path,
            Err(e) => {
                log::error!("waypoint movement disabled: {e}");
                self.path = None;
                return;
            }
        };
        self.path         = Some(path);
        self.current_node = 0;
        self.arrived      = false;
        host.set_roaming(true);
        host.set_roaming_move(true);
        self.start_move_now(host);
    }

    pub fn reset<H: PatrolHost>(&mut self, host: &mut H) {
        if self.is_inert() {
            return;
        }
        host.set_roaming(true);
        host.set_roaming_move(true);
        self.start_move_now(host);
    }

    /// Advance the patrol by `diff_ms`.  Returns `false` once the patrol is
    /// over (one-shot finished) or was never usable.
    pub fn update<H: PatrolHost>(&mut self, host: &mut H, diff_ms: u32) -> bool {
        if host.movement_suppressed() {
            host.set_roaming_move(false);
            return true;
        }
        if self.is_inert() {
            return false;
        }

        if !self.next_move.passed() {
            self.next_move.update(diff_ms);
            if self.next_move.passed() {
                return self.issue_move(host);
            }
            return true;
        }

        if host.platform().is_none() {
            let (position, orientation) = (host.position(), host.orientation());
            host.set_home_position(position, orientation);
        }

        if host.is_halted() {
            self.next_move.reset(self.config.stop_for_interaction_ms);
        } else if host.motion_finished() {
            self.process_arrival(host);
            return self.issue_move(host);
        }
        true
    }

    pub fn finalize<H: PatrolHost>(&mut self, host: &mut H) {
        host.set_roaming(false);
        host.set_roaming_move(false);
        host.set_walk(false);
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn resolve_path<H: PatrolHost>(&self, host: &H) -> MovementResult<Arc<SharedPath>> {
        let id = self
            .path_id
            .or_else(|| host.default_path_id())
            .ok_or(MovementError::NoPathAssigned)?;
        Ok(self.store.resolve(id)?)
    }

    fn start_move_now<H: PatrolHost>(&mut self, host: &mut H) {
        self.next_move.reset(0);
        self.issue_move(host);
    }

    fn issue_move<H: PatrolHost>(&mut self, host: &mut H) -> bool {
        // An arrival delay just started; the hop waits for the timer.
        if !self.next_move.passed() {
            return true;
        }
        let Some(path) = self.path.clone() else {
            return false;
        };
        let Some(last) = path.last_index() else {
            return false;
        };

        if self.arrived {
            if self.current_node >= last && !self.repeat {
                settle_at(host, &path.nodes[last]);
                host.request_movement_reset();
                return false;
            }
            self.current_node = (self.current_node + 1) % path.len();
        }

        let Some(node) = path.get(self.current_node) else {
            return false;
        };
        self.arrived = false;
        host.set_roaming_move(true);

        // Patrol coordinates on a platform are platform-local.
        let platform = host.platform();
        let (destination, facing) = match platform {
            Some(t) => (
                t.to_world(node.position),
                node.faces_on_arrival().map(|o| t.orientation_to_world(o)),
            ),
            None => (node.position, node.faces_on_arrival()),
        };
        let mut request = MoveRequest::to(destination).styled(node.style).facing(facing);
        if platform.is_some() {
            request = request.world_space();
        }
        host.launch(request);

        if host.leads_formation() {
            host.set_walk(node.style != MoveStyle::Run);
            host.move_formation(destination);
        }
        true
    }

    fn process_arrival<H: PatrolHost>(&mut self, host: &mut H) {
        if self.arrived {
            return;
        }
        let Some(path) = self.path.clone() else {
            return;
        };
        let Some(node) = path.get(self.current_node) else {
            return;
        };

        host.set_roaming_move(false);
        self.arrived = true;

        if let Some(trigger) = node.trigger.filter(|_| host.rng().roll_chance(node.trigger_chance)) {
            log::debug!("path {} node {}: firing {trigger}", path.id, self.current_node);
            host.set_roaming_move(false);
            host.fire_path_trigger(trigger);
        }

        host.notify_arrival(self.current_node);
        host.persist_waypoint(self.current_node);

        if node.delay_ms != 0 {
            host.set_roaming_move(false);
            self.next_move.reset(node.delay_ms);
        }
    }
}

/// Make the final node of a one-shot patrol the entity's home.
fn settle_at<H: PatrolHost>(host: &mut H, node: &PathNode) {
    let orientation = host.orientation();
    match host.platform() {
        Some(t) => {
            host.set_platform_home_position(node.position, t.orientation_to_local(orientation));
            host.set_home_position(t.to_world(node.position), orientation);
        }
        None => host.set_home_position(node.position, orientation),
    }
}

impl<H: PatrolHost> MovementController<H> for WaypointController {
    fn kind(&self) -> MovementKind {
        MovementKind::Waypoint
    }

    fn initialize(&mut self, host: &mut H) {
        WaypointController::initialize(self, host);
    }

    fn reset(&mut self, host: &mut H) {
        WaypointController::reset(self, host);
    }

    fn update(&mut self, host: &mut H, diff_ms: u32) -> bool {
        WaypointController::update(self, host, diff_ms)
    }

    fn finalize(&mut self, host: &mut H) {
        WaypointController::finalize(self, host);
    }
}
