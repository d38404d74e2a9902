//! Motion requests handed to a [`MotionDriver`][crate::MotionDriver].
//!
//! Controllers never interpolate positions themselves.  They describe where
//! to go and how to look while doing it; the driver owns the in-flight
//! motion.

use pf_core::{MoveStyle, Position};

use crate::{MotionError, MotionResult};

/// Animation to play on reaching a destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Animation {
    ToGround,
    ToFly,
}

// ── MoveRequest ───────────────────────────────────────────────────────────────

/// A single-destination move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub destination: Position,

    /// Gait override.  `None` leaves the driver's current gait alone.
    pub walk: Option<bool>,

    pub animation: Option<Animation>,

    /// Facing to assume on arrival.
    pub facing: Option<f32>,

    /// When `true` the driver treats `destination` as platform-local and
    /// applies the platform transform itself.
    pub platform_relative: bool,
}

impl MoveRequest {
    pub fn to(destination: Position) -> Self {
        Self {
            destination,
            walk:              None,
            animation:         None,
            facing:            None,
            platform_relative: true,
        }
    }

    /// Apply the presentation hints for `style`.
    ///
    /// The mapping is total: every style sets exactly one of `walk` or
    /// `animation`.
    pub fn styled(mut self, style: MoveStyle) -> Self {
        match style {
            MoveStyle::Run     => self.walk = Some(false),
            MoveStyle::Walk    => self.walk = Some(true),
            MoveStyle::Land    => self.animation = Some(Animation::ToGround),
            MoveStyle::Takeoff => self.animation = Some(Animation::ToFly),
        }
        self
    }

    pub fn facing(mut self, facing: Option<f32>) -> Self {
        self.facing = facing;
        self
    }

    /// Disable the driver's own platform transform.
    pub fn world_space(mut self) -> Self {
        self.platform_relative = false;
        self
    }
}

// ── SplineRequest ─────────────────────────────────────────────────────────────

/// A multi-point flight.  The driver reports progress through
/// [`MotionDriver::current_point`][crate::MotionDriver::current_point],
/// numbered from `first_point`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineRequest {
    pub points:       Vec<Position>,
    /// Path index of `points[0]`.
    pub first_point:  usize,
    pub fly:          bool,
    pub smooth:       bool,
    pub uncompressed: bool,
    pub walk:         bool,
    pub velocity:     f32,
}

impl SplineRequest {
    /// A smoothed, uncompressed flight at a fixed velocity.
    ///
    /// # Errors
    ///
    /// [`MotionError::EmptySpline`] when `points` is empty, or
    /// [`MotionError::InvalidVelocity`] for a non-positive or non-finite
    /// velocity.
    pub fn flight(points: Vec<Position>, first_point: usize, velocity: f32) -> MotionResult<Self> {
        if points.is_empty() {
            return Err(MotionError::EmptySpline);
        }
        if !(velocity.is_finite() && velocity > 0.0) {
            return Err(MotionError::InvalidVelocity(velocity));
        }
        Ok(Self {
            points,
            first_point,
            fly:          true,
            smooth:       true,
            uncompressed: true,
            walk:         true,
            velocity,
        })
    }

    /// Path index of the final point.
    #[inline]
    pub fn last_point(&self) -> usize {
        self.first_point + self.points.len().saturating_sub(1)
    }
}
