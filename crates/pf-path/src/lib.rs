//! `pf-path`: shared patrol path definitions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`node`]    | `PathNode`, `SharedPath`                                  |
//! | [`store`]   | `SharedPathStore` (`PathId → Arc<SharedPath>`)            |
//! | [`loader`]  | `load_paths_csv`, `load_paths_reader`                     |
//! | [`error`]   | `PathError`, `PathResult<T>`                              |
//!
//! # Sharing model
//!
//! Paths are loaded once and never mutated.  Many controllers patrol the same
//! path; each holds an `Arc<SharedPath>` handle obtained from
//! [`SharedPathStore::lookup`] rather than a private copy.

pub mod error;
pub mod loader;
pub mod node;
pub mod store;


pub use error::{PathError, PathResult};
pub use loader::{load_paths_csv, load_paths_reader};
pub use node::{PathNode, SharedPath};
pub use store::SharedPathStore;
