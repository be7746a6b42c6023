//! Replay data types.

use serde::{Deserialize, Serialize};
use vantage_core::{ActorId, StateTree};
use vantage_track::{Track, TrackRecord};

/// The replay header.
///
/// # Examples
///
/// ```
/// use vantage_replay::ReplayInfo;
///
/// let info: ReplayInfo =
///     serde_json::from_str(r#"{"encounter": "Deimos", "duration": 312.5}"#).unwrap();
/// assert_eq!(info.encounter, "Deimos");
/// assert_eq!(info.duration, 312.5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayInfo {
    /// Encounter identifier. Selects the map set in a map catalog.
    pub encounter: String,
    /// Total length of the recording, in seconds.
    pub duration: f64,
}

/// A replay document as recorded, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayRecord {
    /// The header.
    pub info: ReplayInfo,
    /// Actor id to initial actor record.
    #[serde(rename = "base-state")]
    pub base_state: StateTree,
    /// Attribute tracks, in recorded order.
    #[serde(default)]
    pub tracks: Vec<TrackRecord>,
}

/// A validated, immutable replay.
///
/// Built with [`ReplayData::new`], [`ReplayData::from_record`] or one of
/// the JSON loaders in [`load`](crate::load). The invariants checked at
/// construction:
///
/// - `duration` is finite and non-negative
/// - every base-state entry is an object
/// - every track is well formed
/// - no track writes inside another track's value, and no track path
///   descends through a non-object base value
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayData {
    pub(crate) info: ReplayInfo,
    pub(crate) base_state: StateTree,
    pub(crate) tracks: Vec<Track>,
}

impl ReplayData {
    /// The replay header.
    pub fn info(&self) -> &ReplayInfo {
        &self.info
    }

    /// Encounter identifier.
    pub fn encounter(&self) -> &str {
        &self.info.encounter
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.info.duration
    }

    /// The initial state every frame starts from.
    pub fn base_state(&self) -> &StateTree {
        &self.base_state
    }

    /// Tracks, in recorded order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Actor ids in base-state order.
    pub fn actor_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.base_state.keys().map(String::as_str)
    }

    /// Returns `true` if `id` names an actor in the base state.
    pub fn has_actor(&self, id: &ActorId) -> bool {
        self.base_state.contains_key(id.as_str())
    }

    /// Number of actors.
    pub fn actor_count(&self) -> usize {
        self.base_state.len()
    }
}
