//! Routed leg data: `LegNode` and `LegRoute`.

use pf_core::{LegId, MapId, Position, TriggerId};

/// One stop on a routed transit leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegNode {
    pub map:               MapId,
    pub position:          Position,
    pub arrival_trigger:   Option<TriggerId>,
    pub departure_trigger: Option<TriggerId>,
    /// Leg this node was authored for.
    pub leg:               LegId,
    /// Index of this node within its own leg.
    pub index:             u32,
}

impl LegNode {
    pub fn new(leg: LegId, index: u32, map: MapId, position: Position) -> Self {
        Self {
            map,
            position,
            arrival_trigger:   None,
            departure_trigger: None,
            leg,
            index,
        }
    }

    pub fn with_triggers(
        mut self,
        arrival:   Option<TriggerId>,
        departure: Option<TriggerId>,
    ) -> Self {
        self.arrival_trigger   = arrival;
        self.departure_trigger = departure;
        self
    }

    /// `true` when `other` is a distinct point for pruning purposes: on a
    /// different map, or more than `sqrt(limit_sq)` away in the plane.
    #[inline]
    pub fn is_distinct_from(&self, other: &LegNode, limit_sq: f32) -> bool {
        self.map != other.map || self.position.planar_distance_sq(other.position) > limit_sq
    }
}

/// The routing service's answer for one itinerary hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegRoute {
    pub leg:  LegId,
    /// Undiscounted price of the leg.
    pub cost: u32,
}
