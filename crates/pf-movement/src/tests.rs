//! Unit tests for pf-movement.

use std::sync::Arc;

use pf_core::{EntityId, EntityRng, LegId, MapId, MoveStyle, PathId, Position, Transform, TriggerId};
use pf_motion::{
    AreaPreloader, MotionDriver, MoveRequest, PatrolHost, ScriptedMotion, SplineRequest,
    TransitHost, TriggerSink, Wallet,
};
use pf_path::{PathNode, SharedPath, SharedPathStore};
use pf_routing::{AssembledPath, Boundary, LegNode};

use crate::{TransitController, WaypointController};

// ── Helpers ───────────────────────────────────────────────────────────────────

const STEP_MS: u32 = 100;

/// A patrolling entity that records everything its controller does.
struct Patroller {
    motion:        ScriptedMotion,
    rng:           EntityRng,
    suppressed:    bool,
    halted:        bool,
    roaming:       bool,
    roaming_move:  bool,
    default_path:  Option<PathId>,
    platform:      Option<Transform>,
    position:      Position,
    orientation:   f32,
    home:          Option<(Position, f32)>,
    platform_home: Option<(Position, f32)>,
    resets:        u32,
    persisted:     Vec<usize>,
    arrivals:      Vec<usize>,
    triggers:      Vec<TriggerId>,
    leader:        bool,
    walk:          Option<bool>,
    formation:     Vec<Position>,
}

impl Patroller {
    fn new() -> Self {
        Self {
            motion:        ScriptedMotion::new(STEP_MS),
            rng:           EntityRng::new(7, EntityId(1)),
            suppressed:    false,
            halted:        false,
            roaming:       false,
            roaming_move:  false,
            default_path:  None,
            platform:      None,
            position:      Position::new(1.0, 2.0, 3.0),
            orientation:   1.0,
            home:          None,
            platform_home: None,
            resets:        0,
            persisted:     Vec::new(),
            arrivals:      Vec::new(),
            triggers:      Vec::new(),
            leader:        false,
            walk:          None,
            formation:     Vec::new(),
        }
    }

    fn launches(&self) -> &[MoveRequest] {
        self.motion.move_requests()
    }
}

impl MotionDriver for Patroller {
    fn launch(&mut self, request: MoveRequest) {
        self.motion.launch(request);
    }
    fn launch_spline(&mut self, request: SplineRequest) {
        self.motion.launch_spline(request);
    }
    fn motion_finished(&self) -> bool {
        self.motion.motion_finished()
    }
    fn current_point(&self) -> usize {
        self.motion.current_point()
    }
}

impl TriggerSink for Patroller {
    fn fire_path_trigger(&mut self, trigger: TriggerId) {
        self.triggers.push(trigger);
    }
    fn notify_arrival(&mut self, node: usize) {
        self.arrivals.push(node);
    }
}

impl PatrolHost for Patroller {
    fn movement_suppressed(&self) -> bool {
        self.suppressed
    }
    fn is_halted(&self) -> bool {
        self.halted
    }
    fn set_roaming(&mut self, on: bool) {
        self.roaming = on;
    }
    fn set_roaming_move(&mut self, on: bool) {
        self.roaming_move = on;
    }
    fn default_path_id(&self) -> Option<PathId> {
        self.default_path
    }
    fn platform(&self) -> Option<Transform> {
        self.platform
    }
    fn position(&self) -> Position {
        self.position
    }
    fn orientation(&self) -> f32 {
        self.orientation
    }
    fn set_home_position(&mut self, position: Position, orientation: f32) {
        self.home = Some((position, orientation));
    }
    fn set_platform_home_position(&mut self, local: Position, orientation: f32) {
        self.platform_home = Some((local, orientation));
    }
    fn request_movement_reset(&mut self) {
        self.resets += 1;
    }
    fn persist_waypoint(&mut self, node: usize) {
        self.persisted.push(node);
    }
    fn leads_formation(&self) -> bool {
        self.leader
    }
    fn set_walk(&mut self, walk: bool) {
        self.walk = Some(walk);
    }
    fn move_formation(&mut self, destination: Position) {
        self.formation.push(destination);
    }
    fn rng(&mut self) -> &mut EntityRng {
        &mut self.rng
    }
}

/// A transit passenger.
struct Flyer {
    motion:         ScriptedMotion,
    in_transit:     bool,
    entered:        u32,
    left:           u32,
    itinerary_left: usize,
    settled:        bool,
    money:          i64,
    spent:          u64,
    triggers:       Vec<TriggerId>,
    preloads:       Vec<(MapId, f32, f32)>,
}

impl Flyer {
    fn new(itinerary_left: usize) -> Self {
        Self {
            motion:     ScriptedMotion::new(STEP_MS),
            in_transit: false,
            entered:    0,
            left:       0,
            itinerary_left,
            settled:    false,
            money:      1_000,
            spent:      0,
            triggers:   Vec::new(),
            preloads:   Vec::new(),
        }
    }
}

impl MotionDriver for Flyer {
    fn launch(&mut self, request: MoveRequest) {
        self.motion.launch(request);
    }
    fn launch_spline(&mut self, request: SplineRequest) {
        self.motion.launch_spline(request);
    }
    fn motion_finished(&self) -> bool {
        self.motion.motion_finished()
    }
    fn current_point(&self) -> usize {
        self.motion.current_point()
    }
}

impl TriggerSink for Flyer {
    fn fire_path_trigger(&mut self, trigger: TriggerId) {
        self.triggers.push(trigger);
    }
    fn notify_arrival(&mut self, _node: usize) {}
}

impl Wallet for Flyer {
    fn deduct(&mut self, amount: u64) {
        self.money -= amount as i64;
    }
    fn record_spend(&mut self, amount: u64) {
        self.spent += amount;
    }
}

impl AreaPreloader for Flyer {
    fn preload(&mut self, map: MapId, x: f32, y: f32) {
        self.preloads.push((map, x, y));
    }
}

impl TransitHost for Flyer {
    fn enter_transit(&mut self) {
        self.in_transit = true;
        self.entered += 1;
    }
    fn leave_transit(&mut self) {
        self.in_transit = false;
        self.left += 1;
    }
    fn advance_itinerary(&mut self) {
        self.itinerary_left = self.itinerary_left.saturating_sub(1);
    }
    fn itinerary_consumed(&self) -> bool {
        self.itinerary_left == 0
    }
    fn settle_on_ground(&mut self) {
        self.settled = true;
    }
}

fn pos(x: f32) -> Position {
    Position::new(x, 0.0, 0.0)
}

/// `n` run-style nodes along the x axis, 10 units apart.
fn line_path(id: u32, n: usize) -> SharedPath {
    let nodes = (0..n).map(|i| PathNode::new(pos(i as f32 * 10.0), MoveStyle::Run)).collect();
    SharedPath::new(PathId(id), nodes)
}

fn store_with(paths: impl IntoIterator<Item = SharedPath>) -> Arc<SharedPathStore> {
    SharedPathStore::from_paths(paths).into_shared()
}

fn patrol(paths: impl IntoIterator<Item = SharedPath>, id: u32, repeat: bool) -> WaypointController {
    WaypointController::new(store_with(paths), Some(PathId(id)), repeat)
}

/// Let one tick of motion pass, then update the controller.
fn step(ctrl: &mut WaypointController, host: &mut Patroller) -> bool {
    host.motion.advance(STEP_MS);
    ctrl.update(host, STEP_MS)
}

fn fly(ctrl: &mut TransitController, host: &mut Flyer, ms: u32) -> bool {
    host.motion.advance(ms);
    ctrl.update(host, ms)
}

/// Transit node with arrival trigger `100 + i` and departure trigger `200 + i`.
fn transit_node(i: u32, map: u32) -> LegNode {
    LegNode::new(LegId(1), i, MapId(map), pos(i as f32 * 100.0))
        .with_triggers(Some(TriggerId(100 + i)), Some(TriggerId(200 + i)))
}

fn transit_path(maps: &[u32], boundaries: Vec<Boundary>) -> AssembledPath {
    let nodes = maps.iter().enumerate().map(|(i, &m)| transit_node(i as u32, m)).collect();
    AssembledPath::from_parts(nodes, boundaries)
}

fn boundary(index: usize, cost: u64, cumulative_cost: u64) -> Boundary {
    Boundary { index, cost, cumulative_cost }
}

// ── WaypointController ────────────────────────────────────────────────────────

#[cfg(test)]
mod waypoint {
    use pf_core::{MovementConfig, MovementKind};
    use pf_motion::MovementController;

    use super::*;

    #[test]
    fn initialize_issues_first_hop() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);

        assert!(host.roaming && host.roaming_move);
        assert_eq!(host.launches().len(), 1);
        assert_eq!(host.launches()[0].destination, pos(0.0));
        assert_eq!(ctrl.current_position(), Some(pos(0.0)));
        assert_eq!(MovementController::<Patroller>::kind(&ctrl), MovementKind::Waypoint);
    }

    #[test]
    fn repeat_patrol_wraps() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);

        let mut visited = Vec::new();
        for _ in 0..7 {
            assert!(step(&mut ctrl, &mut host));
            visited.push(ctrl.current_node());
        }
        assert_eq!(visited, vec![1, 2, 0, 1, 2, 0, 1]);
        assert_eq!(host.arrivals, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(host.persisted, host.arrivals);
        assert_eq!(host.resets, 0);
    }

    #[test]
    fn one_shot_stops_after_last_arrival() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, false);
        ctrl.initialize(&mut host);

        assert!(step(&mut ctrl, &mut host));
        assert!(step(&mut ctrl, &mut host));
        assert_eq!(ctrl.current_node(), 2);
        assert!(!step(&mut ctrl, &mut host));

        assert_eq!(host.arrivals, vec![0, 1, 2]);
        assert_eq!(host.launches().len(), 3);
        assert_eq!(host.resets, 1);
        assert_eq!(host.home, Some((pos(20.0), 1.0)));

        // No further hop, however often it is polled.
        assert!(!step(&mut ctrl, &mut host));
        assert_eq!(host.launches().len(), 3);
        assert_eq!(host.arrivals, vec![0, 1, 2]);
    }

    #[test]
    fn home_follows_entity_while_patrolling() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);
        step(&mut ctrl, &mut host);
        assert_eq!(host.home, Some((Position::new(1.0, 2.0, 3.0), 1.0)));
    }

    #[test]
    fn arrival_delay_pauses_and_trigger_fires_once() {
        let mut path = line_path(1, 3);
        path.nodes[0] = path.nodes[0].clone().with_delay(1_000).with_trigger(TriggerId(9), 99);

        let mut host = Patroller::new();
        let mut ctrl = patrol([path], 1, true);
        ctrl.initialize(&mut host);

        assert!(step(&mut ctrl, &mut host));
        assert_eq!(host.triggers, vec![TriggerId(9)]);
        assert!(!host.roaming_move);
        assert_eq!(ctrl.remaining_pause_ms(), 1_000);

        for _ in 0..5 {
            assert!(step(&mut ctrl, &mut host));
        }
        assert_eq!(ctrl.current_node(), 0);
        assert_eq!(host.triggers.len(), 1);
        assert_eq!(host.arrivals, vec![0]);
        assert_eq!(host.launches().len(), 1);

        for _ in 0..5 {
            step(&mut ctrl, &mut host);
        }
        assert_eq!(ctrl.current_node(), 1);
        assert_eq!(host.launches().len(), 2);
        assert_eq!(host.triggers.len(), 1);
    }

    #[test]
    fn zero_chance_trigger_never_fires() {
        let mut path = line_path(1, 2);
        path.nodes[1] = path.nodes[1].clone().with_trigger(TriggerId(4), 0);

        let mut host = Patroller::new();
        let mut ctrl = patrol([path], 1, true);
        ctrl.initialize(&mut host);
        for _ in 0..20 {
            step(&mut ctrl, &mut host);
        }
        assert!(host.triggers.is_empty());
        assert_eq!(host.arrivals.len(), 20);
    }

    #[test]
    fn trigger_rolls_replay_for_same_seed() {
        let mut path = line_path(1, 2);
        path.nodes[0] = path.nodes[0].clone().with_trigger(TriggerId(1), 50);
        let store = store_with([path]);

        let run = || {
            let mut host = Patroller::new();
            let mut ctrl = WaypointController::new(store.clone(), Some(PathId(1)), true);
            ctrl.initialize(&mut host);
            for _ in 0..40 {
                step(&mut ctrl, &mut host);
            }
            host.triggers.len()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn suppressed_entity_idles() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);

        host.suppressed = true;
        for _ in 0..3 {
            assert!(step(&mut ctrl, &mut host));
        }
        assert!(!host.roaming_move);
        assert!(host.arrivals.is_empty());
        assert_eq!(host.launches().len(), 1);
    }

    #[test]
    fn halt_stops_then_retargets_same_node() {
        let config = MovementConfig { stop_for_interaction_ms: 500, ..MovementConfig::default() };
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true).with_config(config);
        ctrl.initialize(&mut host);

        host.halted = true;
        assert!(step(&mut ctrl, &mut host));
        assert_eq!(ctrl.remaining_pause_ms(), 500);
        host.halted = false;

        for _ in 0..5 {
            assert!(step(&mut ctrl, &mut host));
        }
        assert!(host.arrivals.is_empty());
        assert_eq!(host.launches().len(), 2);
        assert_eq!(host.launches()[1].destination, pos(0.0));
        assert_eq!(ctrl.current_node(), 0);
    }

    #[test]
    fn facing_needs_orientation_and_delay() {
        let mut path = line_path(1, 3);
        path.nodes[0] = path.nodes[0].clone().with_orientation(1.0);
        path.nodes[1] = PathNode::new(pos(10.0), MoveStyle::Walk)
            .with_orientation(2.0)
            .with_delay(500);

        let mut host = Patroller::new();
        let mut ctrl = patrol([path], 1, true);
        ctrl.initialize(&mut host);
        step(&mut ctrl, &mut host);

        let first  = &host.launches()[0];
        let second = &host.launches()[1];
        assert_eq!(first.facing, None);
        assert_eq!(first.walk, Some(false));
        assert_eq!(second.facing, Some(2.0));
        assert_eq!(second.walk, Some(true));
        assert!(first.platform_relative && second.platform_relative);
    }

    #[test]
    fn platform_patrol_moves_in_world_space() {
        let platform = Transform::new(Position::new(100.0, 0.0, 5.0), 0.0);
        let mut host = Patroller::new();
        host.platform = Some(platform);
        host.leader   = true;

        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);
        step(&mut ctrl, &mut host);

        let req = &host.launches()[1];
        assert!(!req.platform_relative);
        assert_eq!(req.destination, Position::new(110.0, 0.0, 5.0));
        assert_eq!(host.formation.last(), Some(&Position::new(110.0, 0.0, 5.0)));
        // Home only follows the entity off-platform.
        assert_eq!(host.home, None);
    }

    #[test]
    fn one_shot_on_platform_rebinds_both_homes() {
        let path = SharedPath::new(
            PathId(1),
            vec![
                PathNode::new(pos(10.0), MoveStyle::Run),
                PathNode::new(pos(0.0), MoveStyle::Run),
            ],
        );
        let platform = Transform::new(Position::new(100.0, 0.0, 0.0), 0.5);
        let mut host = Patroller::new();
        host.platform = Some(platform);

        let mut ctrl = patrol([path], 1, false);
        ctrl.initialize(&mut host);
        step(&mut ctrl, &mut host);
        assert!(!step(&mut ctrl, &mut host));

        assert_eq!(host.platform_home, Some((pos(0.0), 0.5)));
        assert_eq!(host.home, Some((Position::new(100.0, 0.0, 0.0), 1.0)));
        assert_eq!(host.resets, 1);
    }

    #[test]
    fn formation_leader_drags_followers() {
        let mut path = line_path(1, 3);
        path.nodes[1] = PathNode::new(pos(10.0), MoveStyle::Walk);

        let mut host = Patroller::new();
        host.leader = true;
        let mut ctrl = patrol([path], 1, true);
        ctrl.initialize(&mut host);
        assert_eq!(host.walk, Some(false));

        step(&mut ctrl, &mut host);
        assert_eq!(host.walk, Some(true));
        assert_eq!(host.formation, vec![pos(0.0), pos(10.0)]);
    }

    #[test]
    fn unknown_path_leaves_controller_inert() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 9, true);
        ctrl.initialize(&mut host);

        assert!(ctrl.is_inert());
        assert!(!host.roaming);
        assert!(!step(&mut ctrl, &mut host));
        assert!(host.launches().is_empty());
        assert_eq!(ctrl.current_position(), None);
    }

    #[test]
    fn empty_path_is_inert() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([SharedPath::new(PathId(1), vec![])], 1, true);
        ctrl.initialize(&mut host);
        assert!(ctrl.is_inert());
        assert!(!step(&mut ctrl, &mut host));
        ctrl.reset(&mut host);
        assert!(host.launches().is_empty());
    }

    #[test]
    fn falls_back_to_default_path() {
        let mut host = Patroller::new();
        host.default_path = Some(PathId(2));
        let mut ctrl = WaypointController::new(store_with([line_path(2, 2)]), None, true);
        ctrl.initialize(&mut host);
        assert_eq!(ctrl.path_id(), Some(PathId(2)));
        assert!(!ctrl.is_inert());

        let mut orphan = WaypointController::new(store_with([line_path(2, 2)]), None, true);
        orphan.initialize(&mut Patroller::new());
        assert!(orphan.is_inert());
    }

    #[test]
    fn finalize_clears_flags() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);
        ctrl.finalize(&mut host);
        assert!(!host.roaming && !host.roaming_move);
        assert_eq!(host.walk, Some(false));
    }

    #[test]
    fn reset_relaunches_current_target() {
        let mut host = Patroller::new();
        let mut ctrl = patrol([line_path(1, 3)], 1, true);
        ctrl.initialize(&mut host);
        step(&mut ctrl, &mut host);
        ctrl.reset(&mut host);
        assert_eq!(host.launches().len(), 3);
        assert_eq!(host.launches()[2].destination, pos(10.0));
    }
}

// ── TransitController ─────────────────────────────────────────────────────────

#[cfg(test)]
mod transit {
    use pf_core::{AssemblyConfig, MovementConfig, MovementKind, WaypointId};
    use pf_motion::MovementController;
    use pf_routing::{assemble, TaxiTable};

    use super::*;
    use crate::TransitDestination;

    fn leg(xs: &[f32]) -> Vec<LegNode> {
        xs.iter().map(|&x| LegNode::new(LegId(0), 0, MapId(1), pos(x))).collect()
    }

    #[test]
    fn initialize_launches_and_reports_destination() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1, 1], vec![]), 0);

        let dest = ctrl.initialize(&mut host);
        assert_eq!(
            dest,
            Some(TransitDestination { map: MapId(1), x: 300.0, y: 0.0, prefetch_node: Some(1) })
        );
        assert_eq!(host.entered, 1);

        let spline = host.motion.last_spline().unwrap();
        assert_eq!(spline.points.len(), 4);
        assert_eq!(spline.first_point, 0);
        assert!(spline.fly && spline.smooth && spline.uncompressed && spline.walk);
        assert_eq!(spline.velocity, 30.0);
    }

    #[test]
    fn departure_then_arrival_per_hop() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1, 1], vec![]), 0);
        ctrl.initialize(&mut host);

        assert!(fly(&mut ctrl, &mut host, 100));
        assert_eq!(ctrl.current_node(), 1);
        assert_eq!(host.triggers, vec![TriggerId(200), TriggerId(101)]);

        // Two hops in one tick still fire every event in order.
        assert!(!fly(&mut ctrl, &mut host, 250));
        assert_eq!(ctrl.current_node(), 3);
        assert_eq!(
            host.triggers,
            [200, 101, 201, 102, 202, 103].map(TriggerId).to_vec()
        );
        assert!(ctrl.has_arrived());
    }

    #[test]
    fn no_progress_no_events() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1], vec![]), 0);
        ctrl.initialize(&mut host);
        for _ in 0..3 {
            assert!(ctrl.update(&mut host, 10));
        }
        assert!(host.triggers.is_empty());
    }

    #[test]
    fn legs_are_charged_at_their_boundary() {
        let path = transit_path(&[1, 1, 1, 1], vec![boundary(1, 10, 10), boundary(3, 25, 35)]);
        let mut host = Flyer::new(2);
        let mut ctrl = TransitController::new(path, 0);
        ctrl.initialize(&mut host);

        fly(&mut ctrl, &mut host, 100);
        assert_eq!((host.money, host.spent, host.itinerary_left), (990, 10, 1));
        fly(&mut ctrl, &mut host, 100);
        assert_eq!(host.spent, 10);
        fly(&mut ctrl, &mut host, 100);
        assert_eq!((host.money, host.spent, host.itinerary_left), (965, 35, 0));
        assert_eq!(ctrl.pending_boundaries().count(), 0);

        ctrl.finalize(&mut host);
        assert_eq!(host.left, 1);
        assert!(host.settled);
    }

    #[test]
    fn prefetch_fires_once_leaving_len_minus_three() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1, 1, 1, 2], vec![]), 0);
        let dest = ctrl.initialize(&mut host).unwrap();
        assert_eq!(dest.prefetch_node, Some(3));

        while ctrl.current_node() < 3 {
            fly(&mut ctrl, &mut host, 100);
        }
        assert!(host.preloads.is_empty());

        fly(&mut ctrl, &mut host, 100);
        assert_eq!(ctrl.current_node(), 4);
        assert_eq!(host.preloads, vec![(MapId(2), 500.0, 0.0)]);

        for _ in 0..5 {
            fly(&mut ctrl, &mut host, 100);
        }
        assert_eq!(host.preloads.len(), 1);
    }

    #[test]
    fn short_flight_never_preloads() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1], vec![]), 0);
        let dest = ctrl.initialize(&mut host).unwrap();
        assert_eq!(dest.prefetch_node, None);
        assert!(!fly(&mut ctrl, &mut host, 10_000));
        assert!(host.preloads.is_empty());

        // A path exactly as long as the lookahead preloads leaving node 0.
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 2], vec![]), 0);
        assert_eq!(ctrl.initialize(&mut host).and_then(|d| d.prefetch_node), Some(0));
        fly(&mut ctrl, &mut host, 100);
        assert_eq!(host.preloads, vec![(MapId(2), 200.0, 0.0)]);
    }

    #[test]
    fn prefetch_fires_once_when_skipping_past() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1, 1, 1, 1], vec![]), 0);
        ctrl.initialize(&mut host);
        assert!(!fly(&mut ctrl, &mut host, 10_000));
        assert_eq!(host.preloads.len(), 1);
    }

    #[test]
    fn lookahead_is_configurable() {
        let config = MovementConfig { prefetch_lookahead: 5, ..MovementConfig::default() };
        let ctrl = TransitController::new(transit_path(&[1; 6], vec![]), 0).with_config(config);
        assert_eq!(ctrl.destination().and_then(|d| d.prefetch_node), Some(1));
    }

    #[test]
    fn spline_stays_on_one_map() {
        let path = transit_path(&[1, 1, 1, 2, 2], vec![boundary(2, 5, 5), boundary(4, 7, 12)]);
        let mut host = Flyer::new(2);
        let mut ctrl = TransitController::new(path, 0);
        ctrl.initialize(&mut host);

        let first = host.motion.last_spline().unwrap().clone();
        assert_eq!(first.points.len(), 3);
        assert_eq!(first.last_point(), 2);

        // The driver stops at the map edge.
        assert!(fly(&mut ctrl, &mut host, 10_000));
        assert_eq!(ctrl.current_node(), 2);
        assert_eq!(host.spent, 5);

        assert!(ctrl.notify_external_relocation());
        assert_eq!(ctrl.current_node(), 3);
        assert!(!ctrl.notify_external_relocation());
        ctrl.reset(&mut host);

        let second = host.motion.last_spline().unwrap();
        assert_eq!(second.first_point, 3);
        assert_eq!(second.points.len(), 2);
        assert_eq!(host.entered, 2);

        assert!(!fly(&mut ctrl, &mut host, 10_000));
        assert_eq!(host.spent, 12);
        ctrl.finalize(&mut host);
        assert!(host.settled);
    }

    #[test]
    fn relocation_jumps_to_next_map() {
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 2, 2, 3], vec![]), 0);
        assert!(ctrl.notify_external_relocation());
        assert_eq!(ctrl.current_node(), 2);
        assert!(ctrl.notify_external_relocation());
        assert_eq!(ctrl.current_node(), 4);
        assert!(!ctrl.notify_external_relocation());
    }

    #[test]
    fn skip_is_clamped() {
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1], vec![]), 0);
        ctrl.skip_current_node();
        assert_eq!(ctrl.current_node(), 1);
        ctrl.skip_to_node(99);
        assert_eq!(ctrl.current_node(), 2);
        ctrl.skip_current_node();
        assert_eq!(ctrl.current_node(), 2);
        assert!(ctrl.has_arrived());
    }

    #[test]
    fn resume_mid_path_drops_flown_legs() {
        let path = transit_path(&[1, 1, 1, 1, 1], vec![boundary(1, 10, 10), boundary(4, 20, 30)]);
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(path, 2);
        ctrl.initialize(&mut host);

        assert_eq!(host.motion.last_spline().map(|s| s.first_point), Some(2));
        assert_eq!(ctrl.pending_boundaries().map(|b| b.index).collect::<Vec<_>>(), vec![4]);
        assert!(!fly(&mut ctrl, &mut host, 10_000));
        assert_eq!(host.spent, 20);
    }

    #[test]
    fn resume_on_boundary_node_does_not_recharge() {
        let path = transit_path(&[1, 1, 1, 1, 1], vec![boundary(1, 10, 10), boundary(4, 20, 30)]);
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(path, 1);
        ctrl.initialize(&mut host);

        assert_eq!(ctrl.pending_boundaries().map(|b| b.index).collect::<Vec<_>>(), vec![4]);
        assert!(!fly(&mut ctrl, &mut host, 10_000));
        assert_eq!((host.money, host.spent, host.itinerary_left), (980, 20, 0));
    }

    #[test]
    fn skipping_onto_last_node_fires_nothing() {
        let mut host = Flyer::new(1);
        let mut ctrl = TransitController::new(transit_path(&[1, 1, 1], vec![boundary(2, 5, 5)]), 0);
        ctrl.initialize(&mut host);
        assert!(!ctrl.has_arrived());

        ctrl.skip_to_node(2);
        assert!(ctrl.has_arrived());
        assert_eq!(ctrl.pending_boundaries().count(), 1);
        assert!(host.triggers.is_empty());
        assert_eq!(host.spent, 0);
    }

    #[test]
    fn assembled_fare_is_charged_in_full() {
        let mut table = TaxiTable::new();
        table.add_leg(WaypointId(1), WaypointId(2), LegId(1), 15, leg(&[0.0, 100.0, 200.0, 300.0, 400.0]));
        // 310 doubles back onto leg 1's tail and pulls its boundary back.
        table.add_leg(WaypointId(2), WaypointId(3), LegId(2), 25, leg(&[400.0, 310.0, 500.0, 600.0, 700.0]));
        table.add_leg(WaypointId(3), WaypointId(4), LegId(3), 9, leg(&[700.0, 710.0, 800.0, 900.0]));

        let itinerary = [1, 2, 3, 4].map(WaypointId);
        let path = assemble(&itinerary, &table, 0.5, &AssemblyConfig::default());
        let xs: Vec<f32> = path.nodes().iter().map(|n| n.position.x).collect();
        assert_eq!(xs, vec![0.0, 100.0, 200.0, 500.0, 600.0, 800.0, 900.0]);
        assert_eq!(path.boundaries().iter().map(|b| b.index).collect::<Vec<_>>(), vec![2, 4, 6]);
        // ceil(7.5) + ceil(12.5) + ceil(4.5)
        assert_eq!(path.total_cost(), 8 + 13 + 5);

        let mut host = Flyer::new(3);
        let mut ctrl = TransitController::new(path.clone(), 0);
        ctrl.initialize(&mut host);
        assert!(!fly(&mut ctrl, &mut host, 10_000));
        ctrl.finalize(&mut host);

        assert_eq!(host.spent, path.total_cost());
        assert_eq!(host.money, 1_000 - 26);
        assert_eq!(host.itinerary_left, 0);
        assert!(host.settled);
    }

    #[test]
    fn unfinished_itinerary_does_not_settle() {
        let mut host = Flyer::new(3);
        let mut ctrl = TransitController::new(transit_path(&[1, 1], vec![boundary(1, 1, 1)]), 0);
        ctrl.initialize(&mut host);
        fly(&mut ctrl, &mut host, 100);
        ctrl.finalize(&mut host);
        assert!(!host.in_transit);
        assert!(!host.settled);
    }

    #[test]
    fn empty_path_never_moves() {
        let mut host = Flyer::new(0);
        let mut ctrl = TransitController::new(AssembledPath::default(), 5);
        assert_eq!(ctrl.initialize(&mut host), None);
        assert!(!ctrl.update(&mut host, 100));
        ctrl.finalize(&mut host);
        assert_eq!((host.entered, host.left), (0, 0));
        assert!(host.motion.spline_requests().is_empty());
        assert!(ctrl.has_arrived());
    }

    #[test]
    fn boxed_as_movement_controller() {
        let mut host = Flyer::new(0);
        let mut boxed: Box<dyn MovementController<Flyer>> =
            Box::new(TransitController::new(transit_path(&[1, 2], vec![]), 0));
        assert_eq!(boxed.kind(), MovementKind::Transit);
        boxed.initialize(&mut host);
        boxed.on_relocated(&mut host);
        boxed.reset(&mut host);
        assert_eq!(host.motion.last_spline().map(|s| s.first_point), Some(1));
    }
}
