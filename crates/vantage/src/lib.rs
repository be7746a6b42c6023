//! Vantage: reconstruct and play back recorded combat encounters.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Vantage sub-crates. For most users, adding `vantage` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vantage::prelude::*;
//!
//! let replay = ReplayData::from_json_str(r#"{
//!     "info": {"encounter": "Deimos", "duration": 20},
//!     "base-state": {"Deimos": {"type": "Boss", "health": 100}},
//!     "tracks": [{
//!         "path": ["Deimos", "health"],
//!         "interpolation": "lerp",
//!         "data": [{"time": 0, "value": 100}, {"time": 20, "value": 0}]
//!     }]
//! }"#).unwrap();
//!
//! let frame = replay.frame_at(10.0);
//! let boss = frame.actor("Deimos").unwrap();
//! assert_eq!(boss.health(), Some(50.0));
//! assert_eq!(boss.kind(), ActorKind::Boss);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vantage-core` | IDs, positions, the state tree and path writes |
//! | [`track`] | `vantage-track` | Tracks, interpolators and sample calculators |
//! | [`replay`] | `vantage-replay` | Replay loading, validation and frame building |
//! | [`space`] | `vantage-space` | Map metadata, projection, picking and selection |
//! | [`engine`] | `vantage-engine` | The playback controller and scene layout |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the state tree (`vantage-core`).
///
/// Contains [`types::ActorId`], [`types::Position`] and the path-addressed
/// writes in [`types::tree`].
pub use vantage_core as types;

/// Tracks and interpolation (`vantage-track`).
///
/// A [`track::Track`] is a validated, time-ordered series of samples for
/// one state-tree leaf, sampled through its [`track::Interpolation`].
pub use vantage_track as track;

/// Replay loading and frame reconstruction (`vantage-replay`).
///
/// Load a [`replay::ReplayData`] from JSON, then rebuild the full state at
/// any time with [`replay::build_frame`].
pub use vantage_replay as replay;

/// Map metadata and spatial queries (`vantage-space`).
///
/// A [`space::MapSet`] resolves world positions to stacked map levels and
/// projects them into render space; [`space::pick_nearest`] turns clicks
/// into actor ids.
pub use vantage_space as space;

/// The playback controller (`vantage-engine`).
///
/// [`engine::Playback`] owns the clock, selection and asset readiness and
/// produces a [`engine::PlaybackView`] per frame.
pub use vantage_engine as engine;

/// Common imports for typical Vantage usage.
///
/// ```rust
/// use vantage::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vantage_core::{ActorId, MapId, Position, RenderPoint, StateTree};

    // Tracks
    pub use vantage_track::{Interpolation, Track, UpdateKind};

    // Replay
    pub use vantage_replay::{ActorKind, ActorStatus, ActorView, Frame, ReplayData, ReplayError};

    // Space
    pub use vantage_space::{MapCatalog, MapInfo, MapSet, Selection, SpaceError};

    // Engine
    pub use vantage_engine::{
        AssetSender, AssetStatus, PlayState, Playback, PlaybackCommand, PlaybackConfig,
        PlaybackError, PlaybackView,
    };
}
