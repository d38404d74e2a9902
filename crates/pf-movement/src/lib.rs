//! `pf-movement`: the path-following movement controllers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`waypoint`] | `WaypointController`: looping / one-shot patrols                |
//! | [`transit`]  | `TransitController`, `TransitDestination`, `EventHalf`          |
//! | [`error`]    | `MovementError`, `MovementResult<T>`                            |
//!
//! # Movement model (pull-driven)
//!
//! Neither controller owns a clock or a thread:
//!
//! 1. pf-sim calls `update(host, diff_ms)` once per tick.
//! 2. The controller inspects its host (motion finished? which spline point
//!    was reached?) and its own countdown timer.
//! 3. It reacts by launching motion, firing triggers, and charging costs
//!    through the host's collaborator traits.
//! 4. `update` returning `false` tells pf-sim to finalize and drop it.
//!
//! Missing data never surfaces as an error from `update`: an unresolved
//! patrol path is logged once and leaves the controller inert, and an empty
//! transit path simply never moves.

pub mod error;
pub mod transit;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use error::{MovementError, MovementResult};
pub use transit::{EventHalf, TransitController, TransitDestination};
pub use waypoint::WaypointController;
