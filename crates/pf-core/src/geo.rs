//! World-space positions and moving-platform transforms.
//!
//! `Position` uses `f32` like the rest of the movement code.  Distances used
//! for path pruning are planar (x/y only); height is ignored because authored
//! flight nodes at a seam often differ only in altitude.

use std::f32::consts::TAU;

/// A point in world space (or platform-local space, see [`Transform`]).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance in the x/y plane.
    #[inline]
    pub fn planar_distance_sq(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn planar_distance(self, other: Position) -> f32 {
        self.planar_distance_sq(other).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Normalize an angle into `[0, 2π)`.
#[inline]
pub fn normalize_orientation(o: f32) -> f32 {
    let o = o % TAU;
    if o < 0.0 { o + TAU } else { o }
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// The current world placement of a moving platform (ship, zeppelin, …).
///
/// Paths authored for entities riding a platform store offsets in the
/// platform's local frame.  `to_world` rotates an offset around the z axis by
/// the platform yaw and translates it by the platform origin; `to_local` is
/// the exact inverse.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub origin:      Position,
    /// Yaw in radians.
    pub orientation: f32,
}

impl Transform {
    #[inline]
    pub fn new(origin: Position, orientation: f32) -> Self {
        Self { origin, orientation }
    }

    /// Platform-local offset → world position.
    pub fn to_world(&self, local: Position) -> Position {
        let (sin, cos) = self.orientation.sin_cos();
        Position {
            x: self.origin.x + local.x * cos - local.y * sin,
            y: self.origin.y + local.y * cos + local.x * sin,
            z: self.origin.z + local.z,
        }
    }

    /// World position → platform-local offset.
    pub fn to_local(&self, world: Position) -> Position {
        let (sin, cos) = self.orientation.sin_cos();
        let dx = world.x - self.origin.x;
        let dy = world.y - self.origin.y;
        Position {
            x: dx * cos + dy * sin,
            y: dy * cos - dx * sin,
            z: world.z - self.origin.z,
        }
    }

    /// Platform-local facing → world facing.
    #[inline]
    pub fn orientation_to_world(&self, local: f32) -> f32 {
        normalize_orientation(local + self.orientation)
    }

    /// World facing → platform-local facing.
    #[inline]
    pub fn orientation_to_local(&self, world: f32) -> f32 {
        normalize_orientation(world - self.orientation)
    }
}
