//! Error types for track validation.

use thiserror::Error;

/// A malformed track, detected when the track is constructed.
///
/// Every variant is a data-integrity defect in the recording. Tracks are
/// rejected up front rather than producing wrong frames later.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TrackError {
    /// The track path has no segments.
    #[error("track path is empty")]
    EmptyPath,
    /// The track has no samples.
    #[error("track has no samples")]
    EmptyData,
    /// A sample without a `time` in a track that is sampled by time.
    #[error("sample {sample} has no time")]
    MissingTime {
        /// Index of the offending sample.
        sample: usize,
    },
    /// A sample time is NaN or infinite.
    #[error("sample {sample} has non-finite time {time}")]
    NonFiniteTime {
        /// Index of the offending sample.
        sample: usize,
        /// The offending time.
        time: f64,
    },
    /// Sample times go backwards. Equal times are allowed.
    #[error("sample {sample} at time {time} precedes previous sample at {previous}")]
    TimeReversed {
        /// Index of the offending sample.
        sample: usize,
        /// Time of the sample before it.
        previous: f64,
        /// The offending time.
        time: f64,
    },
    /// A fixed-rate track's frequency is not finite and positive.
    #[error("frequency must be finite and positive, got {frequency}")]
    InvalidFrequency {
        /// The offending frequency.
        frequency: f64,
    },
    /// A fixed-rate track's start time is not finite.
    #[error("start time must be finite, got {start_time}")]
    InvalidStartTime {
        /// The offending start time.
        start_time: f64,
    },
    /// A linearly interpolated track holds a value with non-numeric leaves.
    #[error("sample {sample} is not numeric and cannot be interpolated linearly")]
    NonNumericValue {
        /// Index of the offending sample.
        sample: usize,
    },
    /// A circular-linear track holds something other than a number.
    #[error("sample {sample} is not a scalar angle")]
    NonScalarAngle {
        /// Index of the offending sample.
        sample: usize,
    },
}
