//! Collaborator traits: everything a movement controller calls out to.
//!
//! Each trait is implemented by the entity host (see [`crate::host`]), so a
//! call always targets the entity the controller belongs to and no entity id
//! is passed around.

use pf_core::{MapId, TriggerId};

use crate::{MoveRequest, SplineRequest};

/// The motion-interpolation engine.
///
/// Launching a new request replaces whatever was in flight.
pub trait MotionDriver {
    fn launch(&mut self, request: MoveRequest);

    fn launch_spline(&mut self, request: SplineRequest);

    /// `true` once the last launched motion has reached its end.
    fn motion_finished(&self) -> bool;

    /// Path index of the most recently reached spline point.  Only
    /// meaningful while a spline is in flight.
    fn current_point(&self) -> usize;
}

/// Script engine and AI notifications.
pub trait TriggerSink {
    fn fire_path_trigger(&mut self, trigger: TriggerId);

    /// A patrol reached node `node`.
    fn notify_arrival(&mut self, node: usize);
}

/// Entity funds and spend tracking.
pub trait Wallet {
    fn deduct(&mut self, amount: u64);

    /// Report spend to progression / achievement tracking.
    fn record_spend(&mut self, amount: u64);
}

/// Fire-and-forget area loading ahead of arrival.
pub trait AreaPreloader {
    fn preload(&mut self, map: MapId, x: f32, y: f32);
}
