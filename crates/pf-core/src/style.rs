//! Move styles authored on patrol nodes, and the kinds of movement
//! controller an entity can run.
//!
//! Both enums are closed: every consumer matches them exhaustively, so adding
//! a variant is a compile error at each presentation-hint mapping.

/// How an entity travels to a patrol node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStyle {
    /// Default gait for patrols.
    #[default]
    Run,
    Walk,
    /// Flying entity descends and lands at the node.
    Land,
    /// Grounded entity lifts off towards the node.
    Takeoff,
}

impl MoveStyle {
    /// Numeric value used by path data files.
    pub fn from_raw(raw: u8) -> Option<MoveStyle> {
        match raw {
            0 => Some(MoveStyle::Walk),
            1 => Some(MoveStyle::Run),
            2 => Some(MoveStyle::Land),
            3 => Some(MoveStyle::Takeoff),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveStyle::Run     => "run",
            MoveStyle::Walk    => "walk",
            MoveStyle::Land    => "land",
            MoveStyle::Takeoff => "takeoff",
        }
    }
}

impl std::fmt::Display for MoveStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which controller currently owns an entity's movement.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementKind {
    /// No scripted movement; the entity stays where it is.
    #[default]
    Idle,
    /// Patrol over a shared waypoint path.
    Waypoint,
    /// Multi-leg transit over an assembled flight path.
    Transit,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Idle     => "idle",
            MovementKind::Waypoint => "waypoint",
            MovementKind::Transit  => "transit",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
