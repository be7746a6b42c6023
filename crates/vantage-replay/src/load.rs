//! Loading and validating replays.
//!
//! Every loader funnels through [`ReplayData::new`], which checks the
//! whole replay before anything is built from it.

use std::collections::HashMap;
use std::io::Read;

use serde_json::Value;
use tracing::info;
use vantage_core::{PathError, StateTree};
use vantage_track::Track;

use crate::error::ReplayError;
use crate::types::{ReplayData, ReplayInfo, ReplayRecord};

impl ReplayData {
    /// Assemble a replay from validated tracks.
    pub fn new(
        info: ReplayInfo,
        base_state: StateTree,
        tracks: Vec<Track>,
    ) -> Result<Self, ReplayError> {
        check_info(&info)?;
        check_actors(&base_state)?;
        check_overlaps(&tracks)?;
        check_blocked(&base_state, &tracks)?;
        info!(
            encounter = %info.encounter,
            duration = info.duration,
            actors = base_state.len(),
            tracks = tracks.len(),
            "replay loaded"
        );
        Ok(Self {
            info,
            base_state,
            tracks,
        })
    }

    /// Validate a recorded document.
    pub fn from_record(record: ReplayRecord) -> Result<Self, ReplayError> {
        let tracks = record
            .tracks
            .into_iter()
            .enumerate()
            .map(|(index, t)| {
                Track::from_record(t).map_err(|source| ReplayError::MalformedTrack { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(record.info, record.base_state, tracks)
    }

    /// Parse and validate a replay from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ReplayError> {
        Self::from_record(serde_json::from_str(json)?)
    }

    /// Parse and validate a replay from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ReplayError> {
        Self::from_record(serde_json::from_slice(bytes)?)
    }

    /// Parse and validate a replay from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ReplayError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_json_slice(&buf)
    }

    /// Parse and validate a replay from an already-parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, ReplayError> {
        Self::from_record(serde_json::from_value(value)?)
    }
}

fn check_info(info: &ReplayInfo) -> Result<(), ReplayError> {
    if !info.duration.is_finite() || info.duration < 0.0 {
        return Err(ReplayError::InvalidInfo {
            detail: format!(
                "duration must be finite and non-negative, got {}",
                info.duration
            ),
        });
    }
    Ok(())
}

fn check_actors(base_state: &StateTree) -> Result<(), ReplayError> {
    match base_state.iter().find(|(_, v)| !v.is_object()) {
        Some((actor, _)) => Err(ReplayError::InvalidActor {
            actor: actor.clone(),
        }),
        None => Ok(()),
    }
}

/// Rejects a track whose path equals, or is a strict prefix of, another
/// track's path.
fn check_overlaps(tracks: &[Track]) -> Result<(), ReplayError> {
    let mut owners: HashMap<&[String], usize> = HashMap::with_capacity(tracks.len());
    for (index, track) in tracks.iter().enumerate() {
        if let Some(&outer) = owners.get(track.path()) {
            return Err(ReplayError::OverlappingTracks {
                outer,
                inner: index,
            });
        }
        owners.insert(track.path(), index);
    }
    for (index, track) in tracks.iter().enumerate() {
        let path = track.path();
        if let Some(&outer) = (1..path.len()).find_map(|len| owners.get(&path[..len])) {
            return Err(ReplayError::OverlappingTracks {
                outer,
                inner: index,
            });
        }
    }
    Ok(())
}

/// Rejects a track whose path would have to descend through a
/// non-object base-state value.
fn check_blocked(base_state: &StateTree, tracks: &[Track]) -> Result<(), ReplayError> {
    for (index, track) in tracks.iter().enumerate() {
        let Some((_, parents)) = track.path().split_last() else {
            continue;
        };
        let mut node = base_state;
        for (depth, segment) in parents.iter().enumerate() {
            match node.get(segment) {
                None => break,
                Some(Value::Object(child)) => node = child,
                Some(_) => {
                    return Err(ReplayError::BlockedTrack {
                        index,
                        source: PathError::Blocked {
                            segment: segment.clone(),
                            depth,
                        },
                    })
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vantage_core::tree::track_path;
    use vantage_track::{Interpolation, Sample, TrackError, UpdateKind};

    fn doc(tracks: Value) -> Value {
        json!({
            "info": {"encounter": "Deimos", "duration": 20.0},
            "base-state": {
                "Deimos": {"type": "Boss", "health": 100},
                "Player.1": {"type": "Player", "name": "Alice", "buff": {"might": 0}},
            },
            "tracks": tracks,
        })
    }

    fn track(path: &[&str]) -> Track {
        Track::timed(
            track_path(path.iter().copied()),
            vec![Sample::new(0.0, 1)],
            Interpolation::Step,
            UpdateKind::Delta,
        )
        .unwrap()
    }

    #[test]
    fn loads_recorded_document() {
        let replay = ReplayData::from_json_value(doc(json!([
            {"path": ["Deimos", "health"], "data": [{"time": 0, "value": 100}, {"time": 20, "value": 0}],
             "interpolation": "lerp"},
        ])))
        .unwrap();
        assert_eq!(replay.encounter(), "Deimos");
        assert_eq!(replay.duration(), 20.0);
        assert_eq!(replay.tracks().len(), 1);
        assert_eq!(
            replay.actor_ids().collect::<Vec<_>>(),
            vec!["Deimos", "Player.1"]
        );
    }

    #[test]
    fn malformed_track_carries_index() {
        let err = ReplayData::from_json_value(doc(json!([
            {"path": ["Deimos", "health"], "data": [{"time": 0, "value": 1}]},
            {"path": ["Deimos", "x"], "data": []},
        ])))
        .unwrap_err();
        assert!(matches!(
            err,
            ReplayError::MalformedTrack {
                index: 1,
                source: TrackError::EmptyData
            }
        ));
    }

    #[test]
    fn reversed_times_fail_fast() {
        let err = ReplayData::from_json_str(
            &doc(json!([
                {"path": ["Deimos", "health"], "update-type": "delta",
                 "data": [{"time": 5, "value": 1}, {"time": 4, "value": 2}]},
            ]))
            .to_string(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReplayError::MalformedTrack {
                index: 0,
                source: TrackError::TimeReversed { sample: 1, .. }
            }
        ));
    }

    #[test]
    fn rejects_negative_duration() {
        let err = ReplayData::new(
            ReplayInfo {
                encounter: "x".into(),
                duration: -1.0,
            },
            StateTree::new(),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::InvalidInfo { .. }));
    }

    #[test]
    fn rejects_non_object_actor() {
        let mut base = StateTree::new();
        base.insert("ghost".into(), json!(3));
        let err = ReplayData::new(
            ReplayInfo {
                encounter: "x".into(),
                duration: 1.0,
            },
            base,
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::InvalidActor { actor } if actor == "ghost"));
    }

    #[test]
    fn rejects_prefix_and_duplicate_paths() {
        let info = ReplayInfo {
            encounter: "x".into(),
            duration: 1.0,
        };
        let err = ReplayData::new(
            info.clone(),
            StateTree::new(),
            vec![track(&["a", "buff", "might"]), track(&["a", "buff"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReplayError::OverlappingTracks { outer: 1, inner: 0 }
        ));

        let err = ReplayData::new(
            info,
            StateTree::new(),
            vec![track(&["a", "x"]), track(&["a", "x"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReplayError::OverlappingTracks { outer: 0, inner: 1 }
        ));
    }

    #[test]
    fn siblings_do_not_overlap() {
        let replay = ReplayData::new(
            ReplayInfo {
                encounter: "x".into(),
                duration: 1.0,
            },
            StateTree::new(),
            vec![
                track(&["a", "buff", "might"]),
                track(&["a", "buff", "fury"]),
                track(&["a", "bu"]),
            ],
        );
        assert!(replay.is_ok());
    }

    #[test]
    fn rejects_path_through_scalar_base_value() {
        let mut base = StateTree::new();
        base.insert("a".into(), json!({"health": 100}));
        let err = ReplayData::new(
            ReplayInfo {
                encounter: "x".into(),
                duration: 1.0,
            },
            base,
            vec![track(&["a", "health", "shield"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReplayError::BlockedTrack {
                index: 0,
                source: PathError::Blocked { depth: 1, .. }
            }
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = ReplayData::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ReplayError::Json(_)));
    }

    #[test]
    fn reads_from_reader() {
        let text = doc(json!([])).to_string();
        let replay = ReplayData::from_reader(text.as_bytes()).unwrap();
        assert_eq!(replay.actor_count(), 2);
    }
}
