//! Test fixtures and builders for Vantage development.
//!
//! [`TrackBuilder`] and [`ReplayBuilder`] assemble replays in code
//! without hand-writing JSON. The [`fixtures`] module holds the
//! canonical scenarios shared across crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use serde_json::{json, Value};
use vantage_core::tree::track_path;
use vantage_core::{StateTree, TrackPath};
use vantage_replay::{ReplayData, ReplayInfo};
use vantage_track::{Interpolation, Sample, Track, UpdateKind};

/// Builds a [`Track`]. Defaults to a step-hold absolute track.
///
/// Panics on invalid input; fixtures are expected to be well formed.
pub struct TrackBuilder {
    path: TrackPath,
    samples: Vec<Sample>,
    interpolation: Interpolation,
    update: UpdateKind,
    fixed_rate: Option<(f64, f64)>,
}

impl TrackBuilder {
    pub fn new<'a>(path: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            path: track_path(path),
            samples: Vec::new(),
            interpolation: Interpolation::Step,
            update: UpdateKind::Absolute,
            fixed_rate: None,
        }
    }

    pub fn delta(mut self) -> Self {
        self.update = UpdateKind::Delta;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.update = UpdateKind::Absolute;
        self
    }

    pub fn step(mut self) -> Self {
        self.interpolation = Interpolation::Step;
        self
    }

    pub fn linear(mut self) -> Self {
        self.interpolation = Interpolation::Linear;
        self
    }

    pub fn circular(mut self) -> Self {
        self.interpolation = Interpolation::CircularLinear;
        self
    }

    /// Lay samples out on a fixed grid. Sample times given to
    /// [`sample`](Self::sample) are then ignored.
    pub fn fixed_rate(mut self, start_time: f64, frequency: f64) -> Self {
        self.fixed_rate = Some((start_time, frequency));
        self
    }

    pub fn sample(mut self, time: f64, value: impl Into<Value>) -> Self {
        self.samples.push(Sample::new(time, value));
        self
    }

    pub fn build(self) -> Track {
        match self.fixed_rate {
            Some((start_time, frequency)) => Track::fixed_rate(
                self.path,
                self.samples.into_iter().map(|s| s.value).collect(),
                start_time,
                frequency,
                self.interpolation,
            ),
            None => Track::timed(self.path, self.samples, self.interpolation, self.update),
        }
        .expect("fixture track must be valid")
    }
}

/// Builds a [`ReplayData`].
pub struct ReplayBuilder {
    info: ReplayInfo,
    base_state: StateTree,
    tracks: Vec<Track>,
}

impl ReplayBuilder {
    pub fn new(encounter: &str, duration: f64) -> Self {
        Self {
            info: ReplayInfo {
                encounter: encounter.to_string(),
                duration,
            },
            base_state: StateTree::new(),
            tracks: Vec::new(),
        }
    }

    /// Add an actor with an arbitrary record. `fields` must be an object.
    pub fn actor(mut self, id: &str, fields: Value) -> Self {
        self.base_state.insert(id.to_string(), fields);
        self
    }

    pub fn boss(self, id: &str, health: f64) -> Self {
        self.actor(
            id,
            json!({"type": "Boss", "name": id, "health": health, "color": "#ff0000"}),
        )
    }

    pub fn player(self, id: &str, name: &str, class: &str) -> Self {
        self.actor(
            id,
            json!({
                "type": "Player",
                "name": name,
                "class": class,
                "color": "#00ccff",
                "state": "normal",
                "bossdamage": 0,
                "cleavedamage": 0,
                "buff": {},
            }),
        )
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn build(self) -> ReplayData {
        ReplayData::new(self.info, self.base_state, self.tracks)
            .expect("fixture replay must be valid")
    }
}
