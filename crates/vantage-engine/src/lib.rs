//! Playback engine for Vantage replays.
//!
//! Provides [`Playback`], the controller that owns the current time, the
//! play/pause state and the speed multiplier, and rebuilds the frame on
//! every change. It is a plain state machine: the host feeds it
//! [`PlaybackCommand`]s and display-clock ticks and reads back a
//! [`PlaybackView`]. Nothing here renders or spawns threads.
//!
//! # Modules
//!
//! - [`config`]: marker geometry, speeds, viewport
//! - [`assets`]: map image readiness over a channel
//! - [`playback`]: the controller
//! - [`scene`]: actor placement and marker geometry for renderers
//! - [`metrics`]: per-player rate table and time labels

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assets;
pub mod command;
pub mod config;
pub mod error;
pub mod metrics;
pub mod playback;
pub mod scene;

pub use assets::{AssetEvent, AssetSender, AssetStatus, AssetTracker};
pub use command::PlaybackCommand;
pub use config::PlaybackConfig;
pub use error::{AssetLoadError, ConfigError, PlaybackError};
pub use metrics::{format_time, max_rate, BossHealth, MetricsTable, PlayerRow};
pub use playback::{PlayState, Playback, PlaybackView};
pub use scene::{MapBackdrop, MarkerKind, Scene, ScenePlacement, SelectionRing};
