//! Vantage headless playback: drive the controller without a renderer.
//!
//! Demonstrates:
//!   1. Loading a replay and map catalog from JSON
//!   2. Reporting map image loads from a loader thread
//!   3. Playing at 4x on a simulated 60 Hz display clock
//!   4. Clicking an actor and printing the metrics table
//!
//! Run with:
//!   RUST_LOG=info cargo run --example headless_playback

use std::thread;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vantage_engine::{AssetStatus, Playback, PlaybackCommand, PlaybackConfig};
use vantage_replay::ReplayData;
use vantage_space::MapCatalog;

const REPLAY: &str = r##"{
    "info": {"encounter": "Deimos", "duration": 30},
    "base-state": {
        "Deimos": {"type": "Boss", "name": "Deimos", "health": 100, "color": "#d22",
                   "position": {"x": 0, "y": 0, "z": 0}},
        "Player.1": {"type": "Player", "name": "Alice", "class": "Guardian", "color": "#39f",
                     "state": "normal", "bossdamage": 0, "cleavedamage": 0, "buff": {}},
        "Player.2": {"type": "Player", "name": "Bob", "class": "Necromancer", "color": "#3c3",
                     "state": "normal", "bossdamage": 0, "cleavedamage": 0, "buff": {}}
    },
    "tracks": [
        {"path": ["Deimos", "health"], "interpolation": "lerp",
         "data": [{"time": 0, "value": 100}, {"time": 30, "value": 12}]},
        {"path": ["Player.1", "position"], "interpolation": "lerp",
         "data": [{"time": 0, "value": {"x": -1000, "y": 0, "z": 0}},
                  {"time": 30, "value": {"x": 1000, "y": 0, "z": 0}}]},
        {"path": ["Player.1", "heading"], "interpolation": "slerp",
         "data": [{"time": 0, "value": 6.1}, {"time": 30, "value": 0.3}]},
        {"path": ["Player.1", "bossdamage"], "update-type": "delta", "interpolation": "lerp",
         "data": [{"time": 0, "value": 0}, {"time": 30, "value": 540000}]},
        {"path": ["Player.1", "cleavedamage"], "update-type": "delta", "interpolation": "lerp",
         "data": [{"time": 0, "value": 0}, {"time": 30, "value": 600000}]},
        {"path": ["Player.2", "position"],
         "data": [{"time": 0, "value": {"x": 400, "y": 400, "z": 0}}]},
        {"path": ["Player.2", "bossdamage"], "update-type": "delta", "interpolation": "lerp",
         "data": [{"time": 0, "value": 0}, {"time": 20, "value": 300000}]},
        {"path": ["Player.2", "state"], "update-type": "delta",
         "data": [{"time": 0, "value": "normal"}, {"time": 20, "value": "Down"},
                  {"time": 25, "value": "Dead"}]}
    ]
}"##;

const MAPS: &str = r##"{
    "Deimos": [{
        "image": "img/deimos.png",
        "worldCoords": {"left": -2000, "right": 2000, "top": 2000, "bottom": -2000},
        "imageCoords": {"left": 0, "right": 1024, "top": 0, "bottom": 1024}
    }]
}"##;

const FRAME_SECONDS: f64 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let replay = ReplayData::from_json_str(REPLAY)?;
    let catalog = MapCatalog::from_json_str(MAPS)?;
    let mut playback = Playback::new(replay, &catalog, PlaybackConfig::default())?;

    // A stand-in loader thread.
    let assets = playback.asset_sender();
    let images: Vec<String> = playback
        .maps()
        .iter()
        .map(|(_, map)| map.image().to_string())
        .collect();
    thread::spawn(move || {
        for image in images {
            assets.loaded(image);
        }
    })
    .join()
    .map_err(|_| "loader thread panicked")?;

    playback.tick(0.0)?;
    if playback.asset_status() != AssetStatus::Ready {
        return Err("assets did not load".into());
    }

    playback.apply(PlaybackCommand::CycleSpeed)?;
    playback.apply(PlaybackCommand::CycleSpeed)?;
    playback.apply(PlaybackCommand::Play)?;

    let mut now = 0.0;
    let mut next_report = 0.0;
    while playback.is_playing() {
        now += FRAME_SECONDS;
        playback.tick(now)?;
        if playback.time() >= next_report {
            let view = playback.view();
            let boss = view.metrics.bosses.first().map_or(0.0, |b| b.health);
            info!(
                time = %view.current_time,
                boss_health = %format!("{boss:.2}"),
                drawn = view.scene.placements.len(),
                "frame"
            );
            next_report += 5.0;
        }
    }

    // Click where Alice stands at the end of the replay.
    let alice = playback
        .view()
        .scene
        .placement("Player.1")
        .map(|p| p.point)
        .ok_or("Alice is not drawn")?;
    playback.apply(PlaybackCommand::Click {
        x: alice.x,
        y: alice.y,
    })?;
    info!(selected = ?playback.selected(), "clicked");

    let view = playback.view();
    println!("{} {} / {}", view.encounter, view.current_time, view.total_time);
    for row in &view.metrics.rows {
        println!(
            "{:<8} {:<12} boss {:>7}/s  cleave {:>7}/s  (bar scale {:.0})",
            row.name,
            row.class.as_deref().unwrap_or("-"),
            row.boss_rate,
            row.cleave_rate,
            view.rate_scale,
        );
    }
    Ok(())
}
