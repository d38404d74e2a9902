//! Synthetic flight network: four flight masters, two maps.
//!
//! ```text
//!   Harbor(1) ──► Ridge(2) ──► Pass(3) ═══► Isle(4)
//!             map 0           map 0   map 0 → map 1
//! ```
//!
//! The Pass → Isle leg changes map halfway, so the flight is split into two
//! splines.

use pf_core::{LegId, MapId, Position, WaypointId};
use pf_routing::{LegNode, TaxiTable};

pub const HARBOR: WaypointId = WaypointId(1);
pub const RIDGE:  WaypointId = WaypointId(2);
pub const PASS:   WaypointId = WaypointId(3);
pub const ISLE:   WaypointId = WaypointId(4);

const CRUISE_Z: f32 = 120.0;

fn leg(points: &[(u32, f32, f32)]) -> Vec<LegNode> {
    points
        .iter()
        .map(|&(map, x, y)| LegNode::new(LegId(0), 0, MapId(map), Position::new(x, y, CRUISE_Z)))
        .collect()
}

pub fn build_taxi_table() -> TaxiTable {
    let mut table = TaxiTable::new();
    table.add_leg(
        HARBOR,
        RIDGE,
        LegId(11),
        120,
        leg(&[(0, 0.0, 0.0), (0, 150.0, 20.0), (0, 300.0, 60.0), (0, 450.0, 80.0), (0, 600.0, 80.0)]),
    );
    table.add_leg(
        RIDGE,
        PASS,
        LegId(12),
        80,
        leg(&[(0, 600.0, 80.0), (0, 620.0, 90.0), (0, 750.0, 200.0), (0, 900.0, 320.0), (0, 1000.0, 400.0)]),
    );
    table.add_leg(
        PASS,
        ISLE,
        LegId(13),
        200,
        leg(&[
            (0, 1000.0, 400.0),
            (0, 1010.0, 410.0),
            (0, 1200.0, 500.0),
            (1, -800.0, 0.0),
            (1, -600.0, 50.0),
            (1, -400.0, 100.0),
        ]),
    );
    table
}
