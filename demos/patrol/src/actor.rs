//! `Actor`: the demo's host entity.
//!
//! Motion is delegated to a [`ScriptedMotion`]; the actor's position snaps
//! to whatever point the driver last reached.

use pf_core::{EntityRng, MapId, PathId, Position, Transform, TriggerId};
use pf_motion::{
    AreaPreloader, MotionDriver, MoveRequest, PatrolHost, ScriptedMotion, SplineRequest,
    TransitHost, TriggerSink, Wallet,
};
use pf_sim::WorldEntity;

/// Milliseconds the scripted driver spends per path point.
const MS_PER_POINT: u32 = 400;

pub struct Actor {
    pub name:        &'static str,
    motion:          ScriptedMotion,
    rng:             EntityRng,
    pub position:    Position,
    orientation:     f32,
    pub home:        Position,
    pub platform:    Option<Transform>,
    pub path:        Option<PathId>,
    pub gold:        u64,
    pub spent:       u64,
    pub arrivals:    usize,
    pub triggers:    Vec<TriggerId>,
    pub preloaded:   Vec<MapId>,
    pub hops_left:   usize,
    pub in_transit:  bool,
    pub landed:      bool,
}

impl Actor {
    pub fn new(rng: EntityRng, name: &'static str, position: Position) -> Self {
        Self {
            name,
            motion:      ScriptedMotion::new(MS_PER_POINT),
            rng,
            position,
            orientation: 0.0,
            home:        position,
            platform:    None,
            path:        None,
            gold:        0,
            spent:       0,
            arrivals:    0,
            triggers:    Vec::new(),
            preloaded:   Vec::new(),
            hops_left:   0,
            in_transit:  false,
            landed:      false,
        }
    }

    pub fn on_platform(mut self, platform: Transform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn patrolling(mut self, path: PathId) -> Self {
        self.path = Some(path);
        self
    }

    pub fn travelling(mut self, gold: u64, hops: usize) -> Self {
        self.gold      = gold;
        self.hops_left = hops;
        self
    }

    /// A transit spline ended on a map edge and the flight continues on the
    /// next map.  The world must move the actor across before the controller
    /// can make progress again.
    pub fn awaiting_map_change(&self) -> bool {
        self.in_transit && self.motion.motion_finished()
    }

    fn sync_position(&mut self) {
        if let Some(spline) = self.motion.last_spline().filter(|_| self.in_transit) {
            let offset = self.motion.current_point().saturating_sub(spline.first_point);
            if let Some(&p) = spline.points.get(offset) {
                self.position = p;
            }
        } else if self.motion.motion_finished() {
            if let Some(request) = self.motion.last_move() {
                self.position = request.destination;
                if let Some(facing) = request.facing {
                    self.orientation = facing;
                }
            }
        }
    }
}

impl WorldEntity for Actor {
    fn advance(&mut self, diff_ms: u32) {
        self.motion.advance(diff_ms);
        self.sync_position();
    }
}

impl MotionDriver for Actor {
    fn launch(&mut self, request: MoveRequest) {
        self.motion.launch(request);
    }

    fn launch_spline(&mut self, request: SplineRequest) {
        log::debug!("{}: flying {} points", self.name, request.points.len());
        self.motion.launch_spline(request);
    }

    fn motion_finished(&self) -> bool {
        self.motion.motion_finished()
    }

    fn current_point(&self) -> usize {
        self.motion.current_point()
    }
}

impl TriggerSink for Actor {
    fn fire_path_trigger(&mut self, trigger: TriggerId) {
        log::info!("{}: script {trigger} fired at {}", self.name, self.position);
        self.triggers.push(trigger);
    }

    fn notify_arrival(&mut self, _node: usize) {
        self.arrivals += 1;
    }
}

impl PatrolHost for Actor {
    fn movement_suppressed(&self) -> bool {
        false
    }

    fn set_roaming(&mut self, _on: bool) {}

    fn set_roaming_move(&mut self, _on: bool) {}

    fn default_path_id(&self) -> Option<PathId> {
        self.path
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

    fn set_home_position(&mut self, position: Position, _orientation: f32) {
        self.home = position;
    }

    fn request_movement_reset(&mut self) {
        log::info!("{}: patrol finished, settling at {}", self.name, self.home);
    }

    fn persist_waypoint(&mut self, _node: usize) {}

    fn set_walk(&mut self, _walk: bool) {}

    fn rng(&mut self) -> &mut EntityRng {
        &mut self.rng
    }
}

impl Wallet for Actor {
    fn deduct(&mut self, amount: u64) {
        self.gold = self.gold.saturating_sub(amount);
    }

    fn record_spend(&mut self, amount: u64) {
        self.spent += amount;
    }
}

impl AreaPreloader for Actor {
    fn preload(&mut self, map: MapId, x: f32, y: f32) {
        log::debug!("{}: preloading {map} at ({x:.0}, {y:.0})", self.name);
        self.preloaded.push(map);
    }
}

impl TransitHost for Actor {
    fn enter_transit(&mut self) {
        self.in_transit = true;
    }

    fn leave_transit(&mut self) {
        self.in_transit = false;
    }

    fn advance_itinerary(&mut self) {
        self.hops_left = self.hops_left.saturating_sub(1);
    }

    fn itinerary_consumed(&self) -> bool {
        self.hops_left == 0
    }

    fn settle_on_ground(&mut self) {
        self.landed = true;
        log::info!("{}: landed at {}", self.name, self.position);
    }
}
