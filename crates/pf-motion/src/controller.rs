//! The `MovementController` trait: one entity's active movement.

use pf_core::MovementKind;

/// A pull-driven movement state machine for one entity.
///
/// The simulation loop owns the controller and calls
/// [`update`][Self::update] once per tick with the tick length; controllers
/// never spawn timers or threads of their own.  `H` is the entity host the
/// controller drives, usually a [`PatrolHost`][crate::PatrolHost] or
/// [`TransitHost`][crate::TransitHost].
///
/// # Lifecycle
///
/// ```text
/// initialize ─► update* ─► finalize
///                 ▲   │
///                 └ reset (re-launch after an interruption)
/// ```
///
/// `finalize` runs exactly once, either when `update` reports `false` or
/// when the controller is superseded.
///
/// # Thread safety
///
/// Controllers must be `Send` so entities can be ticked on a Rayon pool.  A
/// single controller is only ever touched by the thread ticking its entity.
pub trait MovementController<H: ?Sized>: Send {
    fn kind(&self) -> MovementKind;

    fn initialize(&mut self, host: &mut H);

    /// Re-launch motion from the current progress.
    fn reset(&mut self, host: &mut H);

    /// Advance by `diff_ms`.  Returns `false` once the movement is over.
    fn update(&mut self, host: &mut H, diff_ms: u32) -> bool;

    fn finalize(&mut self, host: &mut H);

    /// The entity was teleported out from under the controller.
    ///
    /// Default: ignored.
    fn on_relocated(&mut self, _host: &mut H) {}
}
