//! Commands consumed by [`Playback::apply`](crate::Playback::apply).

use vantage_core::ActorId;

/// A user or host request to the playback controller.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackCommand {
    /// Start playing, if ready and not at the end.
    Play,
    /// Stop playing.
    Pause,
    /// Play if paused, pause if playing.
    TogglePlay,
    /// Jump to a time in seconds, preserving the play state.
    Seek(f64),
    /// A seek drag started: pause and remember whether to resume.
    BeginSeek,
    /// A seek drag ended: resume if playing when it began.
    EndSeek,
    /// Set an arbitrary speed multiplier.
    SetSpeed(f64),
    /// Step to the next configured speed, wrapping around.
    CycleSpeed,
    /// A click on the map canvas, in render units.
    Click {
        /// Horizontal render coordinate.
        x: f64,
        /// Vertical render coordinate.
        y: f64,
    },
    /// Select an actor directly, or clear with `None`.
    Select(Option<ActorId>),
    /// The viewport changed size.
    Resize {
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },
}
