//! `pf-sim`: tick loop orchestrator for the rust_pf movement controllers.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Start:   observer.on_tick_start
//!   ② Update:  every entity advances its own state (WorldEntity), then
//!              its MotionMaster ticks the active controller with
//!              config.tick_ms (parallel with the `parallel` feature)
//!   ③ Expire:  controllers that returned `false` are finalized, replaced
//!              by IdleMovement, and reported in ascending EntityId order
//!   ④ End:     observer.on_tick_end
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the update phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pf_core::SimConfig;
//! use pf_movement::WaypointController;
//! use pf_sim::{NoopObserver, SimBuilder};
//!
//! let patrol = WaypointController::new(store.clone(), Some(PathId(1)), true);
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .spawn_moving(|id, rng| Guard::new(id, rng), Box::new(patrol))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod entity;
pub mod error;
pub mod master;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use entity::{Entity, WorldEntity};
pub use error::{SimError, SimResult};
pub use master::MotionMaster;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
