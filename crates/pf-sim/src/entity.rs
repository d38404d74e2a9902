//! Simulated entities: host state plus a movement slot.

use pf_core::{EntityId, MovementKind};

use crate::MotionMaster;

/// Per-tick hook on the host itself.
///
/// Runs before the entity's controller so that the controller observes
/// motion progress made during the same tick (the interpolation engine
/// moves first, the controller reacts).
pub trait WorldEntity: Send {
    /// Advance in-flight motion and any other host-side clocks.
    fn advance(&mut self, diff_ms: u32);
}

/// One simulated entity: its host state and its movement slot.
#[derive(Debug)]
pub struct Entity<H> {
    pub id:     EntityId,
    pub host:   H,
    pub motion: MotionMaster<H>,
}

impl<H: WorldEntity> Entity<H> {
    pub fn new(id: EntityId, host: H) -> Self {
        Self { id, host, motion: MotionMaster::new() }
    }

    /// Tick this entity.  Returns the kind of controller that finished, if
    /// one did.
    #[inline]
    pub(crate) fn tick(&mut self, diff_ms: u32) -> Option<MovementKind> {
        self.host.advance(diff_ms);
        self.motion.update(&mut self.host, diff_ms)
    }
}
