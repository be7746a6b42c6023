//! Error types for the playback engine.

use thiserror::Error;
use vantage_space::SpaceError;

/// Errors detected by [`PlaybackConfig::validate()`](crate::PlaybackConfig::validate).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A marker size or scale is NaN, infinite, zero or negative.
    #[error("{field} must be finite and positive, got {value}")]
    InvalidSize {
        /// Name of the offending field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The speed list is empty.
    #[error("speeds must not be empty")]
    NoSpeeds,
    /// A speed multiplier is NaN, infinite, zero or negative.
    #[error("speed multiplier must be finite and positive, got {value}")]
    InvalidSpeed {
        /// The offending multiplier.
        value: f64,
    },
    /// `canvas_portion` is outside `(0, 1]`.
    #[error("canvas_portion must be in (0, 1], got {value}")]
    InvalidCanvasPortion {
        /// The offending portion.
        value: f64,
    },
    /// The viewport has zero or non-finite size.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Viewport width.
        width: f64,
        /// Viewport height.
        height: f64,
    },
}

/// A map image failed to load, so playback can never become ready.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to load '{image}': {reason}")]
pub struct AssetLoadError {
    /// The image that failed.
    pub image: String,
    /// Loader-supplied reason.
    pub reason: String,
}

/// Errors returned by the playback controller.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The configuration is invalid.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    /// Map metadata or layout failed.
    #[error("maps: {0}")]
    Space(#[from] SpaceError),
    /// A required asset failed to load.
    #[error("assets: {0}")]
    Assets(#[from] AssetLoadError),
    /// A selection named an actor that is not in the replay.
    #[error("unknown actor '{id}'")]
    UnknownActor {
        /// The requested id.
        id: String,
    },
    /// A seek target or clock reading is NaN or infinite.
    #[error("time must be finite, got {time}")]
    InvalidTime {
        /// The offending time.
        time: f64,
    },
    /// A speed multiplier is NaN, infinite, zero or negative.
    #[error("speed multiplier must be finite and positive, got {multiplier}")]
    InvalidSpeed {
        /// The offending multiplier.
        multiplier: f64,
    },
}
