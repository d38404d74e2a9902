//! patrol: demo for the rust_pf movement controllers.
//!
//! Three guards loop a harbor patrol, a deckhand walks a one-shot route on
//! a moving ship deck, and a traveller flies a four-stop taxi itinerary that
//! crosses onto a second map.
//!
//! ```text
//! cargo run -p patrol -- [--config demo.json] [--paths paths.csv]
//! ```
//!
//! Set `RUST_LOG=debug` to see every trigger roll and spline launch.

mod actor;
mod routes;

use std::f32::consts::FRAC_PI_2;
use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use pf_core::{EntityId, MovementConfig, MovementKind, PathId, Position, SimConfig, Tick, Transform};
use pf_movement::{TransitController, WaypointController};
use pf_path::{load_paths_csv, load_paths_reader, SharedPathStore};
use pf_routing::assemble;
use pf_sim::{SimBuilder, SimObserver};

use actor::Actor;
use routes::{build_taxi_table, HARBOR, ISLE, PASS, RIDGE};

// ── Constants ─────────────────────────────────────────────────────────────────

const HARBOR_PATROL: PathId = PathId(10);
const DECK_ROUTE:    PathId = PathId(20);
const GUARDS:        [&str; 3] = ["guard-north", "guard-quay", "guard-gate"];
const TRAVEL_PURSE:  u64 = 1_000;

const PATHS_CSV: &str = include_str!("../data/paths.csv");

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:      SimConfig,
    movement: MovementConfig,
    /// Multiplier applied to every taxi fare.
    discount: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:      SimConfig { tick_ms: 100, total_ticks: 1_200, seed: 42 },
            movement: MovementConfig::default(),
            discount: 1.0,
        }
    }
}

struct Options {
    config: Option<PathBuf>,
    paths:  Option<PathBuf>,
}

impl Options {
    fn from_args() -> Result<Self> {
        let mut options = Options { config: None, paths: None };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--config" => &mut options.config,
                "--paths"  => &mut options.paths,
                other      => bail!("unknown argument {other:?}"),
            };
            let value = args.next().with_context(|| format!("{arg} needs a file argument"))?;
            *slot = Some(PathBuf::from(value));
        }
        Ok(options)
    }
}

fn load_config(options: &Options) -> Result<DemoConfig> {
    let Some(path) = &options.config else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn load_store(options: &Options) -> Result<SharedPathStore> {
    let store = match &options.paths {
        Some(path) => load_paths_csv(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_paths_reader(Cursor::new(PATHS_CSV))?,
    };
    Ok(store)
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ExpiryReport {
    finished: Vec<(Tick, EntityId, MovementKind)>,
    peak:     usize,
}

impl SimObserver for ExpiryReport {
    fn on_movement_expired(&mut self, tick: Tick, entity: EntityId, kind: MovementKind) {
        log::info!("{entity}: {kind} movement finished at {tick}");
        self.finished.push((tick, entity, kind));
    }

    fn on_tick_end(&mut self, _tick: Tick, moving: usize) {
        self.peak = self.peak.max(moving);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!("simulation ended at {final_tick}; {} movements finished", self.finished.len());
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::from_args()?;
    let config  = load_config(&options)?;
    config.movement.validate()?;

    println!("=== patrol - rust_pf movement controllers ===");
    println!(
        "Tick: {} ms  |  Ticks: {}  |  Seed: {}",
        config.sim.tick_ms, config.sim.total_ticks, config.sim.seed
    );
    println!();

    // 1. Patrol paths.
    let store = load_store(&options)?.into_shared();
    println!("Loaded {} patrol paths", store.len());

    // 2. Taxi itinerary.
    let table = build_taxi_table();
    let itinerary = [HARBOR, RIDGE, PASS, ISLE];
    let flight = assemble(&itinerary, &table, config.discount, &config.movement.assembly);
    if let Some(reason) = flight.truncation() {
        log::warn!("itinerary cut short: {reason}");
    }
    println!(
        "Assembled flight: {} nodes, {} legs, fare {}",
        flight.len(),
        flight.boundaries().len(),
        flight.total_cost()
    );
    let hops = flight.boundaries().len();

    // 3. Entities.
    let deck = Transform::new(Position::new(2_000.0, -300.0, 0.0), FRAC_PI_2);
    let mut builder = SimBuilder::new(config.sim.clone());
    for (i, name) in GUARDS.into_iter().enumerate() {
        let start = Position::new(100.0 + 20.0 * i as f32, 90.0, 0.0);
        let patrol = WaypointController::new(store.clone(), None, true)
            .with_config(config.movement.clone());
        builder = builder.spawn_moving(
            |_, rng| Actor::new(rng, name, start).patrolling(HARBOR_PATROL),
            Box::new(patrol),
        );
    }
    let deckhand = WaypointController::new(store.clone(), Some(DECK_ROUTE), false)
        .with_config(config.movement.clone());
    builder = builder.spawn_moving(
        |_, rng| Actor::new(rng, "deckhand", deck.origin).on_platform(deck),
        Box::new(deckhand),
    );
    let transit = TransitController::new(flight, 0).with_config(config.movement.clone());
    builder = builder.spawn_moving(
        |_, rng| {
            Actor::new(rng, "traveller", Position::new(0.0, 0.0, 0.0))
                .travelling(TRAVEL_PURSE, hops)
        },
        Box::new(transit),
    );
    let mut sim = builder.build()?;

    // 4. Run, carrying flyers across map edges as their splines end.
    let mut report = ExpiryReport::default();
    while sim.clock.current_tick < sim.config.end_tick() {
        sim.run_ticks(1, &mut report)?;

        let stalled: Vec<EntityId> = sim
            .entities()
            .iter()
            .filter(|e| e.host.awaiting_map_change())
            .map(|e| e.id)
            .collect();
        for id in stalled {
            log::info!("{id}: crossing to the next map");
            sim.relocate(id)?;
        }
    }
    report.on_sim_end(sim.clock.current_tick);

    // 5. Summary.
    println!();
    println!("{:<12} {:>9} {:>8} {:>6} {:>26}", "entity", "movement", "arrivals", "spent", "position");
    for e in sim.entities() {
        let a = &e.host;
        println!(
            "{:<12} {:>9} {:>8} {:>6} {:>26}",
            a.name,
            e.motion.kind().as_str(),
            a.arrivals,
            a.spent,
            a.position.to_string(),
        );
    }
    println!();
    println!("Peak moving entities: {}", report.peak);

    let fired: usize = sim.entities().iter().map(|e| e.host.triggers.len()).sum();
    println!("Path scripts fired:   {fired}");

    let Some(traveller) = sim.entities().iter().map(|e| &e.host).find(|a| a.name == "traveller") else {
        bail!("no traveller spawned");
    };
    if !traveller.landed {
        bail!("traveller never landed (gold left: {})", traveller.gold);
    }
    println!(
        "Traveller landed with {} gold after preloading {:?}",
        traveller.gold, traveller.preloaded
    );
    if let Some(deckhand) = sim.entities().iter().find(|e| e.host.name == "deckhand") {
        println!("Deckhand's new home: {}", deckhand.host.home);
    }

    Ok(())
}
