//! `pf-motion`: movement controller trait, collaborator seams, and motion
//! request types.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`request`]    | `MoveRequest`, `SplineRequest`, `Animation`                      |
//! | [`collab`]     | `MotionDriver`, `TriggerSink`, `Wallet`, `AreaPreloader`         |
//! | [`host`]       | `PatrolHost`, `TransitHost`: per-entity surfaces                 |
//! | [`controller`] | `MovementController` trait                                       |
//! | [`idle`]       | `IdleMovement`: never moves, never expires                       |
//! | [`scripted`]   | `ScriptedMotion`: fixed-pace driver for tests and demos          |
//! | [`error`]      | `MotionError`, `MotionResult<T>`                                 |
//!
//! # Design notes
//!
//! Controllers are generic over their host instead of holding references to
//! the world.  The simulation loop hands each controller `&mut` to its own
//! entity for the duration of one call, which keeps entities independent:
//!
//! 1. **Read** entity state through the host trait (`position`,
//!    `movement_suppressed`, `current_point`, …).
//! 2. **Act** through the collaborator traits (`launch`, `fire_path_trigger`,
//!    `deduct`, `preload`, …).
//!
//! No controller ever sees another entity, so a failure in one entity's
//! update cannot leak into another's.

pub mod collab;
pub mod controller;
pub mod error;
pub mod host;
pub mod idle;
pub mod request;
pub mod scripted;


pub use collab::{AreaPreloader, MotionDriver, TriggerSink, Wallet};
pub use controller::MovementController;
pub use error::{MotionError, MotionResult};
pub use host::{PatrolHost, TransitHost};
pub use idle::IdleMovement;
pub use request::{Animation, MoveRequest, SplineRequest};
pub use scripted::ScriptedMotion;
