//! CSV path loader.
//!
//! # CSV format
//!
//! One row per path node.  Rows may appear in any order; nodes are sorted by
//! `point` within each path.
//!
//! ```csv
//! path_id,point,x,y,z,orientation,delay_ms,move_type,trigger_id,trigger_chance
//! 10,0,100.0,200.0,5.0,0,0,1,0,0
//! 10,1,140.0,200.0,5.0,1.57,3000,0,501,50
//! 10,2,140.0,240.0,5.0,0,0,0,0,0
//! ```
//!
//! | Column           | Meaning                                             |
//! |------------------|-----------------------------------------------------|
//! | `orientation`    | radians; `0` = unset                                |
//! | `move_type`      | `0` walk, `1` run, `2` land, `3` takeoff            |
//! | `trigger_id`     | script id; `0` = none                               |
//! | `trigger_chance` | percent, clamped to 0–99                            |

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pf_core::{MoveStyle, PathId, Position, TriggerId};

use crate::{PathError, PathNode, SharedPath, SharedPathStore};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PathRecord {
    path_id:        u32,
    point:          u32,
    x:              f32,
    y:              f32,
    z:              f32,
    orientation:    f32,
    delay_ms:       u32,
    move_type:      u8,
    trigger_id:     u32,
    trigger_chance: u8,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every path in a CSV file into a [`SharedPathStore`].
pub fn load_paths_csv(path: &Path) -> Result<SharedPathStore, PathError> {
    let file = std::fs::File::open(path)
        .map_err(PathError::Io)?;
    load_paths_reader(file)
}

/// Like [`load_paths_csv`] but accepts any `Read` source.
pub fn load_paths_reader<R: Read>(reader: R) -> Result<SharedPathStore, PathError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_path: BTreeMap<u32, Vec<(u32, PathNode)>> = BTreeMap::new();

    for result in csv_reader.deserialize::<PathRecord>() {
        let row = result.map_err(|e| PathError::Parse(e.to_string()))?;
        let node = to_node(&row)?;
        by_path.entry(row.path_id).or_default().push((row.point, node));
    }

    let mut store = SharedPathStore::new();
    for (id, mut rows) in by_path {
        rows.sort_by_key(|(point, _)| *point);
        let nodes: Vec<PathNode> = rows.into_iter().map(|(_, node)| node).collect();
        log::debug!("loaded path {id} with {} nodes", nodes.len());
        store.insert(SharedPath::new(PathId(id), nodes));
    }

    Ok(store)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_node(row: &PathRecord) -> Result<PathNode, PathError> {
    let style = MoveStyle::from_raw(row.move_type).ok_or_else(|| {
        PathError::Parse(format!(
            "path {} point {}: invalid move_type {} (expected 0–3)",
            row.path_id, row.point, row.move_type
        ))
    })?;

    let mut node = PathNode::new(Position::new(row.x, row.y, row.z), style)
        .with_orientation(row.orientation)
        .with_delay(row.delay_ms);
    if let Some(trigger) = TriggerId::non_zero(row.trigger_id) {
        node = node.with_trigger(trigger, row.trigger_chance);
    }
    Ok(node)
}
