//! `PathNode` and `SharedPath`: immutable patrol path data.

use pf_core::{MoveStyle, PathId, Position, TriggerId};

/// One stop on a patrol path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    /// Destination.  For entities riding a platform this is a platform-local
    /// offset, not a world position.
    pub position: Position,

    /// Facing to assume on arrival.  Authored data uses `0.0` for "unset";
    /// [`PathNode::new`] maps that to `None`.
    pub orientation: Option<f32>,

    pub style: MoveStyle,

    /// Pause after arriving, in milliseconds.  `0` = pass straight through.
    pub delay_ms: u32,

    /// Script fired on arrival, subject to `trigger_chance`.
    pub trigger: Option<TriggerId>,

    /// Percent chance (0–99) that `trigger` fires on a given visit.
    pub trigger_chance: u8,
}

impl PathNode {
    /// A plain pass-through node: no facing, no delay, no trigger.
    pub fn new(position: Position, style: MoveStyle) -> Self {
        Self {
            position,
            orientation:    None,
            style,
            delay_ms:       0,
            trigger:        None,
            trigger_chance: 0,
        }
    }

    /// Set the arrival facing; `0.0` leaves it unset.
    pub fn with_orientation(mut self, orientation: f32) -> Self {
        self.orientation = (orientation != 0.0).then_some(orientation);
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_trigger(mut self, trigger: TriggerId, chance: u8) -> Self {
        self.trigger        = Some(trigger);
        self.trigger_chance = chance.min(99);
        self
    }

    /// `true` when arrival should snap the entity to a facing.
    ///
    /// Pass-through nodes (no delay) never force a facing even when one is
    /// authored.
    #[inline]
    pub fn faces_on_arrival(&self) -> Option<f32> {
        self.orientation.filter(|_| self.delay_ms != 0)
    }
}

/// A named, ordered sequence of [`PathNode`]s.
///
/// Never mutated after it is inserted into a
/// [`SharedPathStore`][crate::SharedPathStore]; controllers hold it through an
/// `Arc` and only ever index into it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedPath {
    pub id:    PathId,
    pub nodes: Vec<PathNode>,
}

impl SharedPath {
    pub fn new(id: PathId, nodes: Vec<PathNode>) -> Self {
        Self { id, nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PathNode> {
        self.nodes.get(index)
    }

    /// Index of the final node, or `None` for an empty path.
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }
}
