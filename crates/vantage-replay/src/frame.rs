//! Frame reconstruction.

use tracing::debug;
use vantage_core::tree::set_path;
use vantage_core::{Position, StateTree};

use crate::actor::ActorView;
use crate::types::ReplayData;

/// The complete world state at one instant.
///
/// A frame owns its state tree outright. It shares nothing with the
/// replay it was built from or with any other frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    time: f64,
    state: StateTree,
}

impl Frame {
    /// The query time this frame was built for, in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The reconstructed state tree.
    pub fn state(&self) -> &StateTree {
        &self.state
    }

    /// Consume the frame, keeping its state tree.
    pub fn into_state(self) -> StateTree {
        self.state
    }

    /// One actor's record.
    pub fn actor(&self, id: &str) -> Option<ActorView<'_>> {
        let (id, value) = self.state.get_key_value(id)?;
        Some(ActorView::new(id, value.as_object()?))
    }

    /// Every actor, in state-tree order.
    pub fn actors(&self) -> impl Iterator<Item = ActorView<'_>> + '_ {
        self.state
            .iter()
            .filter_map(|(id, value)| Some(ActorView::new(id, value.as_object()?)))
    }

    /// Actors that have a position, in state-tree order.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.actors()
            .filter_map(|actor| Some((actor.id(), actor.position()?)))
    }
}

/// Reconstruct the world state at `time`.
///
/// Deep-copies the base state, then writes every track's sampled value
/// at its path. Tracks whose attribute is not yet defined at `time`
/// leave the base value in place. Deterministic: equal inputs give
/// equal frames.
pub fn build_frame(replay: &ReplayData, time: f64) -> Frame {
    let mut state = replay.base_state.clone();
    for track in &replay.tracks {
        let Some(value) = track.sample(time) else {
            continue;
        };
        // Path conflicts are rejected at load, so this only fires for
        // replays assembled around the validator.
        if let Err(error) = set_path(&mut state, track.path(), value) {
            debug!(path = ?track.path(), %error, "skipped track write");
        }
    }
    Frame { time, state }
}

impl ReplayData {
    /// Shorthand for [`build_frame`].
    pub fn frame_at(&self, time: f64) -> Frame {
        build_frame(self, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vantage_core::tree::track_path;
    use vantage_track::{Interpolation, Sample, Track, UpdateKind};

    use crate::types::ReplayInfo;

    fn replay(tracks: Vec<Track>) -> ReplayData {
        let base = match json!({
            "Deimos": {"type": "Boss", "health": 100, "position": {"x": 0, "y": 0, "z": 0}},
            "Player.1": {"type": "Player", "name": "Alice", "bossdamage": 0},
            "Player.2": {"type": "Player", "name": "Bob"},
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        ReplayData::new(
            ReplayInfo {
                encounter: "Deimos".into(),
                duration: 20.0,
            },
            base,
            tracks,
        )
        .unwrap()
    }

    fn delta(path: &[&str], samples: Vec<Sample>, interpolation: Interpolation) -> Track {
        Track::timed(
            track_path(path.iter().copied()),
            samples,
            interpolation,
            UpdateKind::Delta,
        )
        .unwrap()
    }

    #[test]
    fn absent_track_value_leaves_base_state() {
        let replay = replay(vec![delta(
            &["Player.1", "bossdamage"],
            vec![Sample::new(2.0, 10)],
            Interpolation::Linear,
        )]);
        let frame = replay.frame_at(1.0);
        assert_eq!(frame.state(), replay.base_state());
        let frame = replay.frame_at(3.0);
        assert_eq!(frame.actor("Player.1").unwrap().counter("bossdamage"), Some(10.0));
    }

    #[test]
    fn creates_missing_levels_without_touching_siblings() {
        let replay = replay(vec![
            delta(&["Player.2", "buff", "might"], vec![Sample::new(0.0, 5)], Interpolation::Step),
            delta(&["Player.2", "buff", "fury"], vec![Sample::new(0.0, 1)], Interpolation::Step),
        ]);
        let frame = replay.frame_at(0.0);
        let bob = frame.actor("Player.2").unwrap();
        assert_eq!(bob.name(), "Bob");
        assert_eq!(bob.buffs().collect::<Vec<_>>(), vec![("might", 5.0), ("fury", 1.0)]);
    }

    #[test]
    fn frames_do_not_leak_between_queries() {
        let replay = replay(vec![delta(
            &["Player.2", "position"],
            vec![Sample::new(5.0, json!({"x": 1, "y": 1}))],
            Interpolation::Step,
        )]);
        assert!(replay.frame_at(6.0).actor("Player.2").unwrap().position().is_some());
        assert!(replay.frame_at(1.0).actor("Player.2").unwrap().position().is_none());
        assert!(replay.base_state()["Player.2"].get("position").is_none());
    }

    #[test]
    fn positions_follow_state_order() {
        let replay = replay(vec![delta(
            &["Player.2", "position"],
            vec![Sample::new(0.0, json!([3, 4]))],
            Interpolation::Step,
        )]);
        let frame = replay.frame_at(0.0);
        let ids: Vec<_> = frame.positions().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["Deimos", "Player.2"]);
        assert_eq!(frame.time(), 0.0);
    }
}
