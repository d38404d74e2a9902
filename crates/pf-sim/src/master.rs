//! `MotionMaster`: the single active movement slot of one entity.

use pf_core::MovementKind;
use pf_motion::{IdleMovement, MovementController};

/// Owns an entity's active [`MovementController`].
///
/// Exactly one controller is active at a time; when nothing else is running
/// the slot holds [`IdleMovement`].  Superseding or clearing a controller
/// always runs its `finalize` first; there is no other cancellation path.
pub struct MotionMaster<H> {
    active: Box<dyn MovementController<H>>,
}

impl<H> MotionMaster<H> {
    pub fn new() -> Self {
        Self { active: Box::new(IdleMovement) }
    }

    pub fn kind(&self) -> MovementKind {
        self.active.kind()
    }

    pub fn is_idle(&self) -> bool {
        self.kind() == MovementKind::Idle
    }

    /// Replace the active controller with `next` and initialize it.
    pub fn start(&mut self, host: &mut H, mut next: Box<dyn MovementController<H>>) {
        self.active.finalize(host);
        log::debug!("movement {} -> {}", self.active.kind(), next.kind());
        next.initialize(host);
        self.active = next;
    }

    /// Tick the active controller.  When it reports that it is done it is
    /// finalized, dropped in favour of idle, and its kind returned.
    pub fn update(&mut self, host: &mut H, diff_ms: u32) -> Option<MovementKind> {
        if self.active.update(host, diff_ms) {
            return None;
        }
        let kind = self.active.kind();
        self.active.finalize(host);
        self.active = Box::new(IdleMovement);
        Some(kind)
    }

    /// Finalize whatever is running and go idle.
    pub fn clear(&mut self, host: &mut H) {
        self.active.finalize(host);
        self.active = Box::new(IdleMovement);
    }

    /// The entity was teleported: let the controller resynchronize, then
    /// re-launch its motion.
    pub fn relocated(&mut self, host: &mut H) {
        self.active.on_relocated(host);
        self.active.reset(host);
    }
}

impl<H> Default for MotionMaster<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> std::fmt::Debug for MotionMaster<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionMaster").field("kind", &self.kind()).finish()
    }
}
