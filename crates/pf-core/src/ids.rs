//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys without
//! ceremony.  Path data uses `0` for "none" in several columns (trigger ids,
//! default path ids); loaders convert those to `Option<_>` at the boundary so
//! the controllers never compare against magic zeros.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `None` for the `0` placeholder used by authored data.
            #[inline]
            pub fn non_zero(raw: $inner) -> Option<$name> {
                (raw != 0).then_some($name(raw))
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a simulated entity (patrolling actor or transit passenger).
    pub struct EntityId(u32);
}

typed_id! {
    /// Key of a named patrol path in the shared path store.
    pub struct PathId(u32);
}

typed_id! {
    /// Map / continent a node lives on.
    pub struct MapId(u32);
}

typed_id! {
    /// Routed transit leg returned by the routing service.
    pub struct LegId(u32);
}

typed_id! {
    /// Coarse itinerary waypoint (a transit master node).
    pub struct WaypointId(u32);
}

typed_id! {
    /// Script / event id fired at path nodes.
    pub struct TriggerId(u32);
}
