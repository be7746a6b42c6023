//! Playback configuration and validation.
//!
//! [`PlaybackConfig`] carries the marker geometry, speed list and
//! viewport the controller starts with. [`validate()`](PlaybackConfig::validate)
//! checks every field up front; the controller refuses to start with an
//! invalid config.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::error::ConfigError;

// ── PlaybackConfig ─────────────────────────────────────────────────

/// Marker geometry, playback speeds and viewport.
///
/// Sizes are in marker units; a map's scale factor converts them to
/// render units. Every field has a default, so a JSON config only needs
/// the fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Radius of an actor dot, and of the pick radius. Default: 2.0.
    pub dot_size: f64,
    /// Radius of a heading triangle and of the selection ring. Default: 2.5.
    pub boid_size: f64,
    /// Edge length of the down/dead icons. Default: 6.0.
    pub icon_size: f64,
    /// Multiplier applied to each map's pixels-per-world-unit. Default: 30.0.
    pub marker_scale: f64,
    /// Speed multipliers cycled by the speed control. The first is the
    /// initial speed. Default: `[1, 2, 4, 8]`.
    pub speeds: SmallVec<[f64; 4]>,
    /// Viewport width in render units. Default: 800.
    pub viewport_width: f64,
    /// Viewport height in render units. Default: 600.
    pub viewport_height: f64,
    /// Share of the viewport width given to the map canvas. The rest
    /// holds the metrics table. Default: 0.5.
    pub canvas_portion: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            dot_size: 2.0,
            boid_size: 2.5,
            icon_size: 6.0,
            marker_scale: 30.0,
            speeds: smallvec![1.0, 2.0, 4.0, 8.0],
            viewport_width: 800.0,
            viewport_height: 600.0,
            canvas_portion: 0.5,
        }
    }
}

impl PlaybackConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("dot_size", self.dot_size),
            ("boid_size", self.boid_size),
            ("icon_size", self.icon_size),
            ("marker_scale", self.marker_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSize { field, value });
            }
        }
        if self.speeds.is_empty() {
            return Err(ConfigError::NoSpeeds);
        }
        if let Some(&value) = self.speeds.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(ConfigError::InvalidSpeed { value });
        }
        if !self.canvas_portion.is_finite()
            || self.canvas_portion <= 0.0
            || self.canvas_portion > 1.0
        {
            return Err(ConfigError::InvalidCanvasPortion {
                value: self.canvas_portion,
            });
        }
        check_viewport(self.viewport_width, self.viewport_height)?;
        Ok(())
    }

    /// The map canvas for a viewport: `canvas_portion` of its width and
    /// all of its height.
    pub fn map_canvas(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        (viewport_width * self.canvas_portion, viewport_height)
    }
}

pub(crate) fn check_viewport(width: f64, height: f64) -> Result<(), ConfigError> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(ConfigError::InvalidViewport { width, height });
    }
    Ok(())
}
