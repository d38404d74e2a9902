//! The `Sim` struct and its tick loop.

use pf_core::{EntityId, MovementKind, SimClock, SimConfig};
use pf_motion::MovementController;

use crate::{Entity, SimError, SimObserver, SimResult, WorldEntity};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<H>` owns every entity and drives the tick loop:
///
/// 1. **Update**: advance each entity's own state, then call its active
///    controller once with the tick length (optionally parallel with the
///    `parallel` feature).  Entities never see each other, so the order does
///    not matter.
/// 2. **Report** (sequential, ascending `EntityId` for determinism): tell
///    the observer about every controller that finished this tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<H> {
    /// Global configuration (tick length, total ticks, seed).
    pub config: SimConfig,

    /// Simulation clock.
    pub clock: SimClock,

    /// Entities indexed by `EntityId`.
    pub(crate) entities: Vec<Entity<H>>,
}

impl<H: WorldEntity> Sim<H> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    pub fn entities(&self) -> &[Entity<H>] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> SimResult<&Entity<H>> {
        self.entities.get(id.index()).ok_or(SimError::EntityNotFound(id))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> SimResult<&mut Entity<H>> {
        self.entities.get_mut(id.index()).ok_or(SimError::EntityNotFound(id))
    }

    /// Put `controller` in charge of `id`'s movement, finalizing whatever
    /// was running.
    pub fn start_movement(
        &mut self,
        id:         EntityId,
        controller: Box<dyn MovementController<H>>,
    ) -> SimResult<()> {
        let entity = self.entity_mut(id)?;
        entity.motion.start(&mut entity.host, controller);
        Ok(())
    }

    pub fn clear_movement(&mut self, id: EntityId) -> SimResult<()> {
        let entity = self.entity_mut(id)?;
        entity.motion.clear(&mut entity.host);
        Ok(())
    }

    /// Tell `id`'s controller the entity was teleported.
    pub fn relocate(&mut self, id: EntityId) -> SimResult<()> {
        let entity = self.entity_mut(id)?;
        entity.motion.relocated(&mut entity.host);
        Ok(())
    }

    /// Number of entities whose movement slot is not idle.
    pub fn moving_count(&self) -> usize {
        self.entities.iter().filter(|e| !e.motion.is_idle()).count()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        for (entity, kind) in self.process_tick() {
            observer.on_movement_expired(now, entity, kind);
        }

        observer.on_tick_end(now, self.moving_count());
        self.clock.advance();
    }

    /// Update every entity once.  Returns the controllers that finished, in
    /// ascending `EntityId` order.
    fn process_tick(&mut self) -> Vec<(EntityId, MovementKind)> {
        let diff_ms = self.clock.tick_ms;

        #[cfg(not(feature = "parallel"))]
        {
            self.entities
                .iter_mut()
                .filter_map(|e| e.tick(diff_ms).map(|kind| (e.id, kind)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // `collect` keeps input order, so reports stay sorted by id.
            self.entities
                .par_iter_mut()
                .filter_map(|e| e.tick(diff_ms).map(|kind| (e.id, kind)))
                .collect()
        }
    }
}

