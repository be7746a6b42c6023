//! Error types for replay loading.

use std::io;

use thiserror::Error;
use vantage_core::PathError;
use vantage_track::TrackError;

/// Errors raised while loading or validating a replay.
///
/// All of these are construction-time failures. A [`ReplayData`] that
/// loaded successfully produces a frame for any time without error.
///
/// [`ReplayData`]: crate::ReplayData
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The replay source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The replay is not valid JSON or does not match the recorded layout.
    #[error("invalid replay document: {0}")]
    Json(#[from] serde_json::Error),
    /// A track failed validation.
    #[error("malformed track {index}: {source}")]
    MalformedTrack {
        /// Index of the track in the replay's track list.
        index: usize,
        /// What is wrong with it.
        #[source]
        source: TrackError,
    },
    /// The replay header is unusable.
    #[error("invalid replay info: {detail}")]
    InvalidInfo {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A base-state entry is not an actor record.
    #[error("actor '{actor}' is not an object")]
    InvalidActor {
        /// The offending actor id.
        actor: String,
    },
    /// One track writes inside the value another track writes, so the
    /// resulting frame would depend on track order.
    #[error("track {inner} writes inside the value written by track {outer}")]
    OverlappingTracks {
        /// Index of the track with the shorter (or equal) path.
        outer: usize,
        /// Index of the track writing underneath it.
        inner: usize,
    },
    /// A track path descends through a base-state value that is not an
    /// object.
    #[error("track {index} path is blocked by base state: {source}")]
    BlockedTrack {
        /// Index of the offending track.
        index: usize,
        /// Where the path is blocked.
        #[source]
        source: PathError,
    },
}
