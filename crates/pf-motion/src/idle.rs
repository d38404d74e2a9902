//! An idle movement controller: the entity stays put.

use pf_core::MovementKind;

use crate::MovementController;

/// A [`MovementController`] that never moves and never expires.
///
/// This is what an entity runs when nothing else is active, and a handy
/// placeholder in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleMovement;

impl<H: ?Sized> MovementController<H> for IdleMovement {
    fn kind(&self) -> MovementKind {
        MovementKind::Idle
    }

    fn initialize(&mut self, _host: &mut H) {}

    fn reset(&mut self, _host: &mut H) {}

    fn update(&mut self, _host: &mut H, _diff_ms: u32) -> bool {
        true
    }

    fn finalize(&mut self, _host: &mut H) {}
}
