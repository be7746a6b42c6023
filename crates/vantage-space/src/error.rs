//! Error types for map construction.

use thiserror::Error;

/// Errors arising from map metadata or layout.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// A map set must hold at least one map.
    #[error("map set is empty")]
    Empty,
    /// A map's world box has zero or non-finite extent.
    #[error("map {index} has a degenerate world box")]
    DegenerateWorldBox {
        /// Registration index of the map.
        index: usize,
    },
    /// A map's source image box has zero, negative or non-finite extent.
    #[error("map {index} has a degenerate image box")]
    DegenerateImageBox {
        /// Registration index of the map.
        index: usize,
    },
    /// A height range whose bounds are not finite or not ordered.
    #[error("map {index} has invalid height range [{min}, {max}]")]
    InvalidHeightRange {
        /// Registration index of the map.
        index: usize,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The render surface has zero or non-finite size.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// The catalog has no maps for an encounter.
    #[error("no maps for encounter '{encounter}'")]
    UnknownEncounter {
        /// The encounter looked up.
        encounter: String,
    },
    /// Map metadata is not valid JSON or does not match the expected layout.
    #[error("invalid map metadata: {0}")]
    Json(#[from] serde_json::Error),
}
