//! Simulation observer trait for progress reporting and data collection.

use pf_core::{EntityId, MovementKind, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival logger
///
/// ```rust,ignore
/// struct ArrivalLog(Vec<(Tick, EntityId)>);
///
/// impl SimObserver for ArrivalLog {
///     fn on_movement_expired(&mut self, tick: Tick, entity: EntityId, kind: MovementKind) {
///         if kind == MovementKind::Transit {
///             self.0.push((tick, entity));
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any entity is updated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every entity whose controller finished during `tick`.
    ///
    /// Reported in ascending `EntityId` order, after the whole tick ran.
    fn on_movement_expired(&mut self, _tick: Tick, _entity: EntityId, _kind: MovementKind) {}

    /// Called at the end of each tick.
    ///
    /// `moving` is the number of entities whose movement slot is not idle
    /// after the tick.
    fn on_tick_end(&mut self, _tick: Tick, _moving: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
