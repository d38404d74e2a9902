//! Host traits: the per-entity surface each controller drives.
//!
//! A host is one simulated entity as seen by its movement controller.  It
//! bundles the collaborator traits with the entity state the controller
//! reads and the flags it toggles.

use pf_core::{EntityRng, PathId, Position, Transform};

use crate::{AreaPreloader, MotionDriver, TriggerSink, Wallet};

/// An autonomous entity running a waypoint patrol.
pub trait PatrolHost: MotionDriver + TriggerSink {
    /// Something outside the controller forbids movement right now
    /// (stunned, rooted, scripted pause).
    fn movement_suppressed(&self) -> bool;

    /// The entity was stopped in place, e.g. by a player interacting with it.
    fn is_halted(&self) -> bool {
        false
    }

    /// Entity is on a patrol at all.
    fn set_roaming(&mut self, on: bool);

    /// Entity is between two patrol nodes.
    fn set_roaming_move(&mut self, on: bool);

    /// Path to patrol when the controller was created without one.
    fn default_path_id(&self) -> Option<PathId>;

    /// Current transform of the platform the entity rides, if any.
    fn platform(&self) -> Option<Transform> {
        None
    }

    /// World position.
    fn position(&self) -> Position;

    /// World facing.
    fn orientation(&self) -> f32;

    /// The spot the entity returns to after leaving its patrol.
    fn set_home_position(&mut self, position: Position, orientation: f32);

    /// Platform-local home, only used while riding a platform.
    fn set_platform_home_position(&mut self, _local: Position, _orientation: f32) {}

    /// Tear down and rebuild the entity's whole movement stack.
    fn request_movement_reset(&mut self);

    /// Remember the last visited node for crash/reload recovery.
    fn persist_waypoint(&mut self, node: usize);

    fn leads_formation(&self) -> bool {
        false
    }

    fn set_walk(&mut self, walk: bool);

    /// Send formation followers towards `destination` (world space).
    fn move_formation(&mut self, _destination: Position) {}

    fn rng(&mut self) -> &mut EntityRng;
}

/// A player entity flying an assembled transit path.
pub trait TransitHost: MotionDriver + TriggerSink + Wallet + AreaPreloader {
    /// Remove client control and mark the entity as in transit.
    fn enter_transit(&mut self);

    /// Undo [`enter_transit`][Self::enter_transit]: clear transit flags,
    /// dismount and restore the display.
    fn leave_transit(&mut self);

    /// Move on to the next itinerary destination.
    fn advance_itinerary(&mut self);

    /// `true` once every itinerary destination has been reached.
    fn itinerary_consumed(&self) -> bool;

    /// Snap to the ground and restore normal status after landing.
    fn settle_on_ground(&mut self);
}
