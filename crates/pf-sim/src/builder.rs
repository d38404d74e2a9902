//! Fluent builder for constructing a [`Sim`].

use pf_core::{EntityId, EntityRng, SimConfig};
use pf_motion::MovementController;

use crate::{Entity, Sim, SimError, SimResult, WorldEntity};

/// Fluent builder for [`Sim<H>`].
///
/// Entities get dense ids in insertion order, starting at `EntityId(0)`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .spawn(|id, rng| Guard::new(id, rng))
///     .spawn_moving(|id, rng| Guard::new(id, rng), Box::new(patrol))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<H> {
    config:   SimConfig,
    entities: Vec<(H, Option<Box<dyn MovementController<H>>>)>,
}

impl<H: WorldEntity> SimBuilder<H> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, entities: Vec::new() }
    }

    /// Id the next spawned entity will receive.
    pub fn next_id(&self) -> EntityId {
        EntityId(self.entities.len() as u32)
    }

    /// Add an already-built host.
    pub fn add_entity(mut self, host: H) -> Self {
        self.entities.push((host, None));
        self
    }

    /// Build a host from its id and its deterministic RNG (seeded from
    /// `config.seed`).
    pub fn spawn<F>(self, make: F) -> Self
    where
        F: FnOnce(EntityId, EntityRng) -> H,
    {
        let id   = self.next_id();
        let host = make(id, EntityRng::new(self.config.seed, id));
        self.add_entity(host)
    }

    /// Like [`spawn`][Self::spawn], with a controller started at build time.
    pub fn spawn_moving<F>(self, make: F, controller: Box<dyn MovementController<H>>) -> Self
    where
        F: FnOnce(EntityId, EntityRng) -> H,
    {
        let mut builder = self.spawn(make);
        if let Some(last) = builder.entities.last_mut() {
            last.1 = Some(controller);
        }
        builder
    }

    /// Validate the configuration, start any initial controllers, and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<H>> {
        self.config.validate()?;
        if u32::try_from(self.entities.len()).is_err() {
            return Err(SimError::Config(format!(
                "{} entities exceed the id space",
                self.entities.len()
            )));
        }

        let entities = self
            .entities
            .into_iter()
            .enumerate()
            .map(|(i, (host, controller))| {
                let mut entity = Entity::new(EntityId(i as u32), host);
                if let Some(controller) = controller {
                    entity.motion.start(&mut entity.host, controller);
                }
                entity
            })
            .collect();

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            entities,
        })
    }
}
