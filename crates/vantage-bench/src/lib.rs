//! Benchmark profiles for Vantage replay playback.
//!
//! Provides deterministic synthetic raids for benchmarking and demos:
//!
//! - [`raid_document`]: the replay JSON for `players` players plus a boss
//! - [`raid_profile`]: the same document, loaded and validated
//! - [`raid_catalog`]: a two-level map catalog for [`RAID_ENCOUNTER`]
//! - [`click_points`]: deterministic render-space clicks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use serde_json::{json, Value};
use vantage_replay::{ReplayData, ReplayError};
use vantage_space::{AreaBox, HeightRange, MapCatalog, MapInfo};

/// Encounter name of every raid profile.
pub const RAID_ENCOUNTER: &str = "Benchmark Raid";

/// World extent on both axes.
const WORLD: f64 = 4000.0;

/// Height of the boundary between the two levels.
const FLOOR: f64 = 500.0;

fn mix(seed: u64, i: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        .rotate_left(17)
}

/// Deterministic value in `[0, 1)`.
fn unit(seed: u64, i: u64) -> f64 {
    (mix(seed, i) >> 11) as f64 / (1u64 << 53) as f64
}

/// Build the replay document for a raid.
///
/// One boss with a linear health track and `players` players, each with
/// `samples` samples on position (linear), heading (circular), two
/// damage counters (delta, linear) and one buff (delta, step). Samples
/// are one second apart, so the replay lasts `samples - 1` seconds.
/// Every third player spends the second half of the fight upstairs.
pub fn raid_document(players: usize, samples: usize, seed: u64) -> Value {
    let samples = samples.max(2);
    let duration = (samples - 1) as f64;
    let mut base = serde_json::Map::new();
    let mut tracks = Vec::new();

    base.insert(
        "Boss".into(),
        json!({"type": "Boss", "name": "Boss", "health": 100, "color": "#d22",
               "position": {"x": 0, "y": 0, "z": 0}}),
    );
    tracks.push(json!({
        "path": ["Boss", "health"],
        "interpolation": "lerp",
        "data": [{"time": 0, "value": 100}, {"time": duration, "value": 0}],
    }));

    for p in 0..players {
        let id = format!("Player.{}", p + 1);
        base.insert(
            id.clone(),
            json!({"type": "Player", "name": format!("P{}", p + 1), "class": "Guardian",
                   "color": "#39f", "state": "normal",
                   "bossdamage": 0, "cleavedamage": 0, "buff": {}}),
        );
        let key = seed ^ (p as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let upstairs = p % 3 == 2;
        let mut position = Vec::with_capacity(samples);
        let mut heading = Vec::with_capacity(samples);
        let mut boss = Vec::with_capacity(samples);
        let mut cleave = Vec::with_capacity(samples);
        let mut boss_total = 0.0;
        let mut cleave_total = 0.0;
        for s in 0..samples {
            let time = s as f64;
            let i = s as u64 * 4;
            let z = if upstairs && time * 2.0 > duration {
                FLOOR + 100.0
            } else {
                0.0
            };
            position.push(json!({"time": time, "value": {
                "x": (unit(key, i) - 0.5) * WORLD,
                "y": (unit(key, i + 1) - 0.5) * WORLD,
                "z": z,
            }}));
            heading.push(json!({"time": time,
                "value": unit(key, i + 2) * std::f64::consts::TAU}));
            boss_total += (unit(key, i + 3) * 20_000.0).trunc();
            cleave_total += (unit(key, i + 3) * 25_000.0).trunc();
            boss.push(json!({"time": time, "value": boss_total}));
            cleave.push(json!({"time": time, "value": cleave_total}));
        }
        tracks.push(json!({"path": [id, "position"], "interpolation": "lerp",
                           "data": position}));
        tracks.push(json!({"path": [id, "heading"], "interpolation": "slerp",
                           "data": heading}));
        tracks.push(json!({"path": [id, "bossdamage"], "update-type": "delta",
                           "interpolation": "lerp", "data": boss}));
        tracks.push(json!({"path": [id, "cleavedamage"], "update-type": "delta",
                           "interpolation": "lerp", "data": cleave}));
        tracks.push(json!({"path": [id, "buff", "might"], "update-type": "delta",
                           "data": [{"time": 0, "value": 0},
                                    {"time": duration / 2.0, "value": 25}]}));
    }

    json!({
        "info": {"encounter": RAID_ENCOUNTER, "duration": duration},
        "base-state": base,
        "tracks": tracks,
    })
}

/// Load [`raid_document`] as a validated replay.
pub fn raid_profile(players: usize, samples: usize, seed: u64) -> Result<ReplayData, ReplayError> {
    ReplayData::from_json_value(raid_document(players, samples, seed))
}

/// Two stacked levels covering the raid's world extent.
pub fn raid_catalog() -> MapCatalog {
    let half = WORLD / 2.0;
    let level = |image: &str, min: f64, max: f64| MapInfo {
        image: image.to_string(),
        world_coords: AreaBox::new(-half, half, half, -half),
        image_coords: AreaBox::new(0.0, 1024.0, 0.0, 1024.0),
        height_range: Some(HeightRange::new(min, max)),
    };
    let mut catalog = MapCatalog::new();
    catalog.insert(
        RAID_ENCOUNTER,
        vec![
            level("raid/lower.png", -FLOOR, FLOOR),
            level("raid/upper.png", FLOOR, FLOOR * 3.0),
        ],
    );
    catalog
}

/// `n` deterministic clicks inside a `width` by `height` canvas.
pub fn click_points(n: usize, width: f64, height: f64, seed: u64) -> Vec<(f64, f64)> {
    (0..n as u64)
        .map(|i| (unit(seed, 2 * i) * width, unit(seed, 2 * i + 1) * height))
        .collect()
}
