//! Canonical replays and map sets.

use serde_json::{json, Value};
use vantage_replay::ReplayData;
use vantage_space::{AreaBox, HeightRange, MapCatalog, MapInfo};

use crate::{ReplayBuilder, TrackBuilder};

/// Encounter name used by every fixture replay.
pub const ENCOUNTER: &str = "Deimos";

/// One boss whose health falls linearly from 100 at t=0 to 0 at t=20.
pub fn boss_health_replay() -> ReplayData {
    ReplayBuilder::new(ENCOUNTER, 20.0)
        .boss("Deimos", 100.0)
        .track(
            TrackBuilder::new(["Deimos", "health"])
                .linear()
                .sample(0.0, 100)
                .sample(20.0, 0)
                .build(),
        )
        .build()
}

/// A boss and two players on a single 100x100 world with counters,
/// buffs, headings and a downed state.
///
/// - `Deimos` stands still at (50, 50)
/// - `Player.1` (Alice) walks from (10, 10) to (90, 10) over 10 s and
///   out-damages Bob
/// - `Player.2` (Bob) stands at (20, 80), goes down at t=6 and dies at t=8
pub fn skirmish_replay() -> ReplayData {
    ReplayBuilder::new(ENCOUNTER, 10.0)
        .boss("Deimos", 100.0)
        .player("Player.1", "Alice", "Guardian")
        .player("Player.2", "Bob", "Necromancer")
        .track(
            TrackBuilder::new(["Deimos", "position"])
                .sample(0.0, position(50.0, 50.0, 0.0))
                .build(),
        )
        .track(
            TrackBuilder::new(["Deimos", "health"])
                .linear()
                .sample(0.0, 100)
                .sample(10.0, 40)
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.1", "position"])
                .linear()
                .sample(0.0, position(10.0, 10.0, 0.0))
                .sample(10.0, position(90.0, 10.0, 0.0))
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.1", "heading"])
                .circular()
                .sample(0.0, 0.0)
                .sample(10.0, 1.0)
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.1", "bossdamage"])
                .delta()
                .linear()
                .sample(0.0, 0)
                .sample(10.0, 20000)
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.1", "cleavedamage"])
                .delta()
                .linear()
                .sample(0.0, 0)
                .sample(10.0, 25000)
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.1", "buff", "might"])
                .delta()
                .sample(0.0, 10)
                .sample(5.0, 25)
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.2", "position"])
                .sample(0.0, position(20.0, 80.0, 0.0))
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.2", "state"])
                .delta()
                .sample(0.0, "normal")
                .sample(6.0, "Down")
                .sample(8.0, "Dead")
                .build(),
        )
        .track(
            TrackBuilder::new(["Player.2", "bossdamage"])
                .delta()
                .linear()
                .sample(0.0, 0)
                .sample(6.0, 3000)
                .build(),
        )
        .build()
}

/// A `{x, y, z}` value.
pub fn position(x: f64, y: f64, z: f64) -> Value {
    json!({"x": x, "y": y, "z": z})
}

/// A single square map covering world 0..100 on both axes.
pub fn single_map() -> Vec<MapInfo> {
    vec![square_map("img/arena.png", None)]
}

/// Two stacked levels: heights (0, 100) and (100, 200).
pub fn two_level_maps() -> Vec<MapInfo> {
    vec![
        square_map("img/lower.png", Some(HeightRange::new(0.0, 100.0))),
        square_map("img/upper.png", Some(HeightRange::new(100.0, 200.0))),
    ]
}

/// A catalog with [`single_map`] registered under [`ENCOUNTER`].
pub fn single_map_catalog() -> MapCatalog {
    let mut catalog = MapCatalog::new();
    catalog.insert(ENCOUNTER, single_map());
    catalog
}

/// A catalog with [`two_level_maps`] registered under [`ENCOUNTER`].
pub fn two_level_catalog() -> MapCatalog {
    let mut catalog = MapCatalog::new();
    catalog.insert(ENCOUNTER, two_level_maps());
    catalog
}

fn square_map(image: &str, height_range: Option<HeightRange>) -> MapInfo {
    MapInfo {
        image: image.to_string(),
        world_coords: AreaBox::new(0.0, 100.0, 0.0, 100.0),
        image_coords: AreaBox::new(0.0, 512.0, 0.0, 512.0),
        height_range,
    }
}
