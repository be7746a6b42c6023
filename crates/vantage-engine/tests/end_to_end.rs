//! End-to-end playback: load JSON, report assets, play, seek, pick.

use proptest::prelude::*;
use vantage_core::ActorId;
use vantage_engine::{
    AssetStatus, MarkerKind, PlayState, Playback, PlaybackCommand, PlaybackConfig, PlaybackError,
};
use vantage_replay::ReplayData;
use vantage_space::MapCatalog;
use vantage_test_utils::fixtures::{skirmish_replay, two_level_catalog, ENCOUNTER};
use vantage_test_utils::{ReplayBuilder, TrackBuilder};

const REPLAY_JSON: &str = r##"{
    "info": {"encounter": "Deimos", "duration": 20},
    "base-state": {
        "Deimos": {"type": "Boss", "name": "Deimos", "health": 100,
                   "position": {"x": 50, "y": 50, "z": 0}, "color": "#ff0000"}
    },
    "tracks": [
        {"path": ["Deimos", "health"], "update-type": "absolute", "interpolation": "linear",
         "data": [{"time": 0, "value": 100}, {"time": 20, "value": 0}]}
    ]
}"##;

const MAPS_JSON: &str = r##"{
    "Deimos": [{
        "image": "img/deimos.png",
        "worldCoords": {"left": 0, "right": 100, "top": 0, "bottom": 100},
        "imageCoords": {"left": 0, "right": 512, "top": 0, "bottom": 512}
    }]
}"##;

fn loaded() -> Playback {
    let replay = ReplayData::from_json_str(REPLAY_JSON).unwrap();
    let catalog = MapCatalog::from_json_str(MAPS_JSON).unwrap();
    let mut playback = Playback::new(replay, &catalog, PlaybackConfig::default()).unwrap();
    playback.asset_sender().loaded("img/deimos.png");
    playback.tick(0.0).unwrap();
    playback
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn plays_boss_health_down_to_midpoint() {
    let mut playback = loaded();
    assert!(playback.is_ready());
    playback.apply(PlaybackCommand::Play).unwrap();
    playback.tick(1000.0).unwrap();
    for step in 1..=10 {
        playback.tick(1000.0 + step as f64).unwrap();
    }
    assert_eq!(playback.time(), 10.0);
    let view = playback.view();
    assert_eq!(view.metrics.bosses[0].health, 50.0);
    assert_eq!(view.current_time, "0:10");
    assert_eq!(view.state, PlayState::Playing);
}

#[test]
fn readiness_waits_for_every_level() {
    let catalog = two_level_catalog();
    let mut playback =
        Playback::new(skirmish_replay(), &catalog, PlaybackConfig::default()).unwrap();
    let assets = playback.asset_sender();
    assets.loaded("img/lower.png");
    playback.tick(0.0).unwrap();
    assert_eq!(playback.asset_status(), AssetStatus::Loading { pending: 1 });
    assert!(!playback.apply(PlaybackCommand::Play).unwrap());

    assets.loaded("img/upper.png");
    assert!(playback.apply(PlaybackCommand::Play).unwrap());
    assert!(playback.is_playing());
}

#[test]
fn failed_asset_blocks_playback_with_error() {
    let catalog = two_level_catalog();
    let mut playback =
        Playback::new(skirmish_replay(), &catalog, PlaybackConfig::default()).unwrap();
    playback.asset_sender().loaded("img/lower.png");
    playback.asset_sender().failed("img/upper.png", "connection reset");
    assert!(matches!(
        playback.apply(PlaybackCommand::Play),
        Err(PlaybackError::Assets(_))
    ));
    assert_eq!(playback.state(), PlayState::Paused);
}

#[test]
fn unknown_encounter_is_rejected() {
    let replay = ReplayBuilder::new("Nowhere", 1.0).boss("b", 100.0).build();
    let result = Playback::new(replay, &two_level_catalog(), PlaybackConfig::default());
    assert!(matches!(result, Err(PlaybackError::Space(_))));
}

#[test]
fn click_selects_on_the_clicked_level_only() {
    // Two stacked levels on a 400x600 canvas: each slot is 400x300 and
    // the square maps are pillarboxed to 300x300 at x 50..350.
    let replay = ReplayBuilder::new(ENCOUNTER, 10.0)
        .boss("lower", 100.0)
        .boss("upper", 100.0)
        .track(
            TrackBuilder::new(["lower", "position"])
                .sample(0.0, vantage_test_utils::fixtures::position(50.0, 50.0, 10.0))
                .build(),
        )
        .track(
            TrackBuilder::new(["upper", "position"])
                .sample(0.0, vantage_test_utils::fixtures::position(50.0, 50.0, 150.0))
                .build(),
        )
        .build();
    let mut playback = Playback::new(replay, &two_level_catalog(), PlaybackConfig::default()).unwrap();
    playback.asset_sender().loaded("img/lower.png");
    playback.asset_sender().loaded("img/upper.png");
    playback.tick(0.0).unwrap();

    playback.apply(PlaybackCommand::Click { x: 200.0, y: 150.0 }).unwrap();
    assert_eq!(playback.selected().map(ActorId::as_str), Some("lower"));
    playback.apply(PlaybackCommand::Click { x: 200.0, y: 450.0 }).unwrap();
    assert_eq!(playback.selected().map(ActorId::as_str), Some("upper"));

    let view = playback.view();
    let ring = view.scene.ring.expect("selected actor is drawn");
    assert_eq!(ring.center.y, 450.0);
}

#[test]
fn downed_player_gets_down_marker() {
    let mut playback = Playback::new(
        skirmish_replay(),
        &vantage_test_utils::fixtures::single_map_catalog(),
        PlaybackConfig::default(),
    )
    .unwrap();
    playback.asset_sender().loaded("img/arena.png");
    playback.apply(PlaybackCommand::Seek(6.5)).unwrap();
    let view = playback.view();
    let bob = view.scene.placement("Player.2").unwrap();
    assert!(matches!(bob.marker, MarkerKind::Down { .. }));
    assert_eq!(view.metrics.rows[0].name, "Alice");
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn seek_position_stays_in_range(time in -100.0f64..100.0) {
        let mut playback = loaded();
        playback.apply(PlaybackCommand::Seek(time)).unwrap();
        let position = playback.seek_position();
        prop_assert!((0.0..=20.0).contains(&position));
        prop_assert_eq!(position, position.trunc());
        prop_assert_eq!(playback.time(), time);
    }

    #[test]
    fn ticks_never_move_time_backwards(steps in prop::collection::vec(0.0f64..0.5, 1..40)) {
        let mut playback = loaded();
        playback.apply(PlaybackCommand::Play).unwrap();
        let mut now = 0.0;
        let mut last = playback.time();
        playback.tick(now).unwrap();
        for step in steps {
            now += step;
            playback.tick(now).unwrap();
            prop_assert!(playback.time() >= last);
            last = playback.time();
        }
    }
}
