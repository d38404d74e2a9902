//! `pf-core`: foundational types for the `rust_pf` movement controllers.
//!
//! This crate is a dependency of every other `pf-*` crate.  It has no `pf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `EntityId`, `PathId`, `MapId`, `LegId`, `WaypointId`, `TriggerId` |
//! | [`geo`]      | `Position`, `Transform` (moving-platform frame)            |
//! | [`style`]    | `MoveStyle`, `MovementKind`                                |
//! | [`time`]     | `ResumeTimer`, `Tick`, `SimClock`, `SimConfig`             |
//! | [`config`]   | `MovementConfig`, `AssemblyConfig`                         |
//! | [`rng`]      | `EntityRng` (per-entity deterministic RNG)                 |
//! | [`error`]    | `PfError`, `PfResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod style;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AssemblyConfig, MovementConfig};
pub use error::{PfError, PfResult};
pub use geo::{Position, Transform};
pub use ids::{EntityId, LegId, MapId, PathId, TriggerId, WaypointId};
pub use rng::EntityRng;
pub use style::{MoveStyle, MovementKind};
pub use time::{ResumeTimer, SimClock, SimConfig, Tick};
