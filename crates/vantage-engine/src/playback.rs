//! The playback controller.
//!
//! [`Playback`] owns the replay, the map set, the current frame and the
//! play state. Every input goes through [`apply`](Playback::apply) or
//! [`tick`](Playback::tick); both return whether observable state
//! changed, so a host only redraws when needed.
//!
//! # State machine
//!
//! ```text
//!             play() [ready, time < duration]
//!   Paused ──────────────────────────────────▶ Playing
//!     ▲                                          │
//!     └─────── pause() / time > duration ────────┘
//! ```
//!
//! Time only advances in [`tick`](Playback::tick), driven by the host's
//! display clock. The first tick after `play()` only records the clock.
//! There is no background work: everything for one frame happens
//! synchronously inside the call that asks for it.

use tracing::{debug, info, trace, warn};
use vantage_core::{ActorId, RenderPoint};
use vantage_replay::{build_frame, Frame, ReplayData};
use vantage_space::{pick_nearest, MapCatalog, MapSet, Selection};

use crate::assets::{AssetSender, AssetStatus, AssetTracker};
use crate::command::PlaybackCommand;
use crate::config::{check_viewport, PlaybackConfig};
use crate::error::PlaybackError;
use crate::metrics::{format_time, max_rate, MetricsTable, CLEAVE_COUNTER};
use crate::scene::Scene;

// ── PlayState ───────────────────────────────────────────────────

/// Whether time is advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    /// Stopped or paused.
    #[default]
    Paused,
    /// Advancing on every tick.
    Playing,
}

// ── PlaybackView ────────────────────────────────────────────────

/// A read-only snapshot of everything a presentation layer shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackView<'a> {
    /// The current frame.
    pub frame: &'a Frame,
    /// The selected actor.
    pub selection: Option<&'a ActorId>,
    /// Maps, actor placements and the selection ring.
    pub scene: Scene,
    /// Player rates and boss health.
    pub metrics: MetricsTable,
    /// Bar scale for the rate columns.
    pub rate_scale: f64,
    /// Encounter name.
    pub encounter: &'a str,
    /// Current time as `m:ss`.
    pub current_time: String,
    /// Duration as `m:ss`.
    pub total_time: String,
    /// Seek bar position in whole seconds, within `[0, duration]`.
    pub seek_position: f64,
    /// Play state.
    pub state: PlayState,
    /// Current speed multiplier.
    pub speed: f64,
    /// Whether every asset has loaded.
    pub ready: bool,
}

// ── Playback ────────────────────────────────────────────────────

/// Single-threaded playback controller.
///
/// # Example
///
/// ```ignore
/// let mut playback = Playback::new(replay, &catalog, PlaybackConfig::default())?;
/// let assets = playback.asset_sender();
/// // ... host loads images and reports through `assets` ...
/// playback.apply(PlaybackCommand::Play)?;
/// loop {
///     if playback.tick(clock_seconds())? {
///         render(playback.view());
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Playback {
    replay: ReplayData,
    maps: MapSet,
    config: PlaybackConfig,
    assets: AssetTracker,
    ready: bool,
    state: PlayState,
    frame: Frame,
    seek_position: f64,
    last_tick: Option<f64>,
    speed_index: usize,
    speed: f64,
    resume_after_seek: Option<bool>,
    selection: Selection,
    rate_scale: f64,
}

impl Playback {
    /// Build a controller for `replay`, taking its maps from `catalog`.
    pub fn new(
        replay: ReplayData,
        catalog: &MapCatalog,
        config: PlaybackConfig,
    ) -> Result<Self, PlaybackError> {
        config.validate()?;
        let (width, height) = config.map_canvas(config.viewport_width, config.viewport_height);
        let maps = catalog.map_set(replay.encounter(), width, height)?;
        Self::with_maps(replay, maps, config)
    }

    /// Build a controller with an already laid-out map set. The map set
    /// is laid out again for the configured viewport.
    pub fn with_maps(
        replay: ReplayData,
        maps: MapSet,
        config: PlaybackConfig,
    ) -> Result<Self, PlaybackError> {
        config.validate()?;
        let (width, height) = config.map_canvas(config.viewport_width, config.viewport_height);
        let mut maps = maps.with_marker_scale(config.marker_scale);
        maps.layout(width, height)?;
        let assets = AssetTracker::new(maps.iter().map(|(_, map)| map.image().to_string()));
        let frame = build_frame(&replay, 0.0);
        let rate_scale = max_rate(&replay, CLEAVE_COUNTER);
        let speed = config.speeds[0];
        info!(
            encounter = replay.encounter(),
            duration = replay.duration(),
            maps = maps.len(),
            "playback created"
        );
        Ok(Self {
            replay,
            maps,
            config,
            assets,
            ready: false,
            state: PlayState::Paused,
            frame,
            seek_position: 0.0,
            last_tick: None,
            speed_index: 0,
            speed,
            resume_after_seek: None,
            selection: Selection::new(),
            rate_scale,
        })
    }

    /// Handle for the host's asset loader.
    pub fn asset_sender(&self) -> AssetSender {
        self.assets.sender()
    }

    // ── Commands ────────────────────────────────────────────────

    /// Apply one command. Returns `true` if observable state changed.
    pub fn apply(&mut self, command: PlaybackCommand) -> Result<bool, PlaybackError> {
        let mut changed = self.poll_assets();
        changed |= match command {
            PlaybackCommand::Play => self.play()?,
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::TogglePlay => match self.state {
                PlayState::Playing => self.pause(),
                PlayState::Paused => self.play()?,
            },
            PlaybackCommand::Seek(time) => self.seek(time)?,
            PlaybackCommand::BeginSeek => {
                self.resume_after_seek = Some(self.state == PlayState::Playing);
                self.pause()
            }
            PlaybackCommand::EndSeek => match self.resume_after_seek.take() {
                Some(true) => self.play()?,
                _ => false,
            },
            PlaybackCommand::SetSpeed(multiplier) => self.set_speed(multiplier)?,
            PlaybackCommand::CycleSpeed => self.cycle_speed(),
            PlaybackCommand::Click { x, y } => self.click(x, y),
            PlaybackCommand::Select(Some(id)) => self.select(id)?,
            PlaybackCommand::Select(None) => self.selection.clear(),
            PlaybackCommand::Resize { width, height } => self.resize(width, height)?,
        };
        Ok(changed)
    }

    /// Start playing. Does nothing if already playing, not ready, or at
    /// the end of the replay.
    pub fn play(&mut self) -> Result<bool, PlaybackError> {
        if let Some(failure) = self.assets.failure() {
            return Err(failure.clone().into());
        }
        if self.state == PlayState::Playing
            || !self.ready
            || self.frame.time() >= self.replay.duration()
        {
            return Ok(false);
        }
        self.state = PlayState::Playing;
        self.last_tick = None;
        debug!(time = self.frame.time(), "play");
        Ok(true)
    }

    /// Stop playing. Idempotent.
    pub fn pause(&mut self) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }
        self.state = PlayState::Paused;
        debug!(time = self.frame.time(), "pause");
        true
    }

    /// Jump to `time`, pausing for the jump and resuming afterwards if
    /// playback was active.
    pub fn seek(&mut self, time: f64) -> Result<bool, PlaybackError> {
        if !time.is_finite() {
            return Err(PlaybackError::InvalidTime { time });
        }
        let was_playing = self.pause();
        self.set_frame(time);
        if was_playing {
            self.play()?;
        }
        debug!(time, "seek");
        Ok(true)
    }

    /// Set an arbitrary speed multiplier.
    pub fn set_speed(&mut self, multiplier: f64) -> Result<bool, PlaybackError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(PlaybackError::InvalidSpeed { multiplier });
        }
        if let Some(index) = self.config.speeds.iter().position(|&s| s == multiplier) {
            self.speed_index = index;
        }
        let changed = self.speed != multiplier;
        self.speed = multiplier;
        Ok(changed)
    }

    /// Step to the next configured speed.
    pub fn cycle_speed(&mut self) -> bool {
        self.speed_index = (self.speed_index + 1) % self.config.speeds.len();
        let next = self.config.speeds[self.speed_index];
        let changed = self.speed != next;
        self.speed = next;
        debug!(speed = next, "speed");
        changed
    }

    /// Select whatever is under a click, or clear the selection.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        let hit = pick_nearest(
            &self.maps,
            self.frame.positions(),
            RenderPoint::new(x, y),
            self.config.dot_size,
        );
        self.selection.apply_pick(hit)
    }

    /// Select an actor by id.
    pub fn select(&mut self, id: ActorId) -> Result<bool, PlaybackError> {
        if !self.replay.has_actor(&id) {
            return Err(PlaybackError::UnknownActor { id: id.0 });
        }
        Ok(self.selection.select(id))
    }

    /// Lay the maps out for a new viewport.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, PlaybackError> {
        check_viewport(width, height)?;
        let (canvas_width, canvas_height) = self.config.map_canvas(width, height);
        self.maps.layout(canvas_width, canvas_height)?;
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        Ok(true)
    }

    // ── Clock ───────────────────────────────────────────────────

    /// Advance time to the host clock reading `now`, in seconds.
    ///
    /// Returns `true` if a new frame was built.
    pub fn tick(&mut self, now: f64) -> Result<bool, PlaybackError> {
        if !now.is_finite() {
            return Err(PlaybackError::InvalidTime { time: now });
        }
        let changed = self.poll_assets();
        if self.state != PlayState::Playing {
            return Ok(changed);
        }
        let Some(last) = self.last_tick.replace(now) else {
            return Ok(changed);
        };
        let elapsed = (now - last).max(0.0);
        let time = self.frame.time() + elapsed * self.speed;
        trace!(elapsed, time, "tick");
        self.set_frame(time);
        if self.frame.time() > self.replay.duration() {
            self.pause();
        }
        Ok(true)
    }

    /// Rebuild the frame for `time`. The frame uses the raw time; the
    /// seek position is clamped to the replay and truncated.
    pub fn set_frame(&mut self, time: f64) {
        self.frame = build_frame(&self.replay, time);
        self.seek_position = time.clamp(0.0, self.replay.duration()).trunc();
    }

    fn poll_assets(&mut self) -> bool {
        // Failure is terminal and reported once, on the drain that saw it.
        if self.ready || self.assets.failure().is_some() {
            return false;
        }
        match self.assets.drain() {
            AssetStatus::Ready => {
                info!("assets ready");
                self.ready = true;
                self.set_frame(0.0);
                true
            }
            AssetStatus::Loading { pending } => {
                trace!(pending, "assets loading");
                false
            }
            AssetStatus::Failed(error) => {
                warn!(%error, "playback cannot become ready");
                false
            }
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Build the presentation snapshot for the current frame.
    pub fn view(&self) -> PlaybackView<'_> {
        PlaybackView {
            frame: &self.frame,
            selection: self.selection.selected(),
            scene: Scene::build(&self.frame, &self.maps, &self.selection, &self.config),
            metrics: MetricsTable::from_frame(&self.frame),
            rate_scale: self.rate_scale,
            encounter: self.replay.encounter(),
            current_time: format_time(self.frame.time()),
            total_time: format_time(self.replay.duration().trunc()),
            seek_position: self.seek_position,
            state: self.state,
            speed: self.speed,
            ready: self.ready,
        }
    }

    /// The replay being played.
    pub fn replay(&self) -> &ReplayData {
        &self.replay
    }

    /// The laid-out maps.
    pub fn maps(&self) -> &MapSet {
        &self.maps
    }

    /// The active configuration.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// The current frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The current time in seconds.
    pub fn time(&self) -> f64 {
        self.frame.time()
    }

    /// Seek bar position in whole seconds.
    pub fn seek_position(&self) -> f64 {
        self.seek_position
    }

    /// Play state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Returns `true` while playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Returns `true` once every asset has loaded.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The selected actor.
    pub fn selected(&self) -> Option<&ActorId> {
        self.selection.selected()
    }

    /// Asset readiness, without draining pending events.
    pub fn asset_status(&self) -> AssetStatus {
        self.assets.status()
    }
}
