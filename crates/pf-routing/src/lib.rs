//! `pf-routing`: transit legs, routing seam, and path assembly.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`leg`]       | `LegNode`, `LegRoute`                                     |
//! | [`router`]    | `RoutingService` trait, `TaxiTable`                       |
//! | [`assembler`] | `assemble`, `AssembledPath`, `Boundary`                   |
//! | [`error`]     | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod assembler;
pub mod error;
pub mod leg;
pub mod router;


pub use assembler::{assemble, AssembledPath, Boundary};
pub use error::{RoutingError, RoutingResult};
pub use leg::{LegNode, LegRoute};
pub use router::{RoutingService, TaxiTable};
