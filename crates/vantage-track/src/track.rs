//! The [`Track`] type and its validated construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vantage_core::TrackPath;

use crate::error::TrackError;
use crate::interpolate::{is_numeric, Interpolation};

/// One recorded point of a track.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Seconds from replay start.
    pub time: f64,
    /// The attribute's value at `time`.
    pub value: Value,
}

impl Sample {
    /// Construct a sample.
    pub fn new(time: f64, value: impl Into<Value>) -> Self {
        Self {
            time,
            value: value.into(),
        }
    }
}

/// How a track's recorded values relate to time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    /// Cumulative figures sampled at irregular times. Held at the last
    /// sample past the end, never decayed.
    Delta,
    /// Absolute values. Sampled on a fixed-rate grid when the track
    /// declares a frequency, otherwise at their recorded times.
    #[default]
    Absolute,
}

/// Where a track's samples sit on the time axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleLayout {
    /// Each sample carries its own time.
    Timed,
    /// Sample `i` sits at `start_time + i * frequency`.
    FixedRate {
        /// Time of the first sample.
        start_time: f64,
        /// Spacing between samples, in seconds.
        frequency: f64,
    },
}

/// A sample as recorded: `{time, value}`, or a bare value in a
/// fixed-rate series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleRecord {
    /// A sample with an explicit time.
    Timed {
        /// Seconds from replay start.
        time: f64,
        /// The recorded value.
        value: Value,
    },
    /// A value whose time is implied by its index.
    Bare(Value),
}

/// A track as recorded, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrackRecord {
    /// Keys locating the attribute in the state tree.
    pub path: TrackPath,
    /// The recorded samples.
    pub data: Vec<SampleRecord>,
    /// Blend policy; step-hold when absent.
    #[serde(default)]
    pub interpolation: Option<Interpolation>,
    /// Update semantics; absolute when absent.
    #[serde(default)]
    pub update_type: Option<UpdateKind>,
    /// First sample time of a fixed-rate series.
    #[serde(default)]
    pub start_time: Option<f64>,
    /// Sample spacing of a fixed-rate series.
    #[serde(default)]
    pub frequency: Option<f64>,
}

/// A validated, immutable track.
///
/// Construct with [`Track::timed`], [`Track::fixed_rate`] or from a
/// [`TrackRecord`]. Every constructor checks the invariants listed on
/// [`TrackError`]; a `Track` that exists is safe to sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    path: TrackPath,
    samples: Vec<Sample>,
    layout: SampleLayout,
    interpolation: Interpolation,
    update: UpdateKind,
}

impl Track {
    /// A track sampled at its recorded times.
    pub fn timed(
        path: TrackPath,
        samples: Vec<Sample>,
        interpolation: Interpolation,
        update: UpdateKind,
    ) -> Result<Self, TrackError> {
        check_path(&path)?;
        check_times(&samples)?;
        check_values(&samples, interpolation)?;
        Ok(Self {
            path,
            samples,
            layout: SampleLayout::Timed,
            interpolation,
            update,
        })
    }

    /// An absolute track with one value every `frequency` seconds,
    /// starting at `start_time`.
    pub fn fixed_rate(
        path: TrackPath,
        values: Vec<Value>,
        start_time: f64,
        frequency: f64,
        interpolation: Interpolation,
    ) -> Result<Self, TrackError> {
        check_path(&path)?;
        if values.is_empty() {
            return Err(TrackError::EmptyData);
        }
        if !start_time.is_finite() {
            return Err(TrackError::InvalidStartTime { start_time });
        }
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(TrackError::InvalidFrequency { frequency });
        }
        let samples: Vec<Sample> = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Sample {
                time: start_time + i as f64 * frequency,
                value,
            })
            .collect();
        check_values(&samples, interpolation)?;
        Ok(Self {
            path,
            samples,
            layout: SampleLayout::FixedRate {
                start_time,
                frequency,
            },
            interpolation,
            update: UpdateKind::Absolute,
        })
    }

    /// Validate a recorded track.
    ///
    /// Absolute tracks that declare a `frequency` become fixed-rate
    /// series (sample times, if present, are ignored). Everything else
    /// is sampled by time and needs a `time` on every sample.
    pub fn from_record(record: TrackRecord) -> Result<Self, TrackError> {
        let interpolation = record.interpolation.unwrap_or_default();
        let update = record.update_type.unwrap_or_default();
        match (update, record.frequency) {
            (UpdateKind::Absolute, Some(frequency)) => {
                let values = record
                    .data
                    .into_iter()
                    .map(|s| match s {
                        SampleRecord::Timed { value, .. } => value,
                        SampleRecord::Bare(value) => value,
                    })
                    .collect();
                Self::fixed_rate(
                    record.path,
                    values,
                    record.start_time.unwrap_or(0.0),
                    frequency,
                    interpolation,
                )
            }
            _ => {
                let samples = record
                    .data
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| match s {
                        SampleRecord::Timed { time, value } => Ok(Sample { time, value }),
                        SampleRecord::Bare(_) => Err(TrackError::MissingTime { sample: i }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::timed(record.path, samples, interpolation, update)
            }
        }
    }

    /// Keys locating the attribute in the state tree.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The validated samples, in time order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Where the samples sit on the time axis.
    pub fn layout(&self) -> SampleLayout {
        self.layout
    }

    /// Blend policy between neighbouring samples.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Update semantics.
    pub fn update(&self) -> UpdateKind {
        self.update
    }

    /// Time of the first sample.
    pub fn start_time(&self) -> f64 {
        match self.layout {
            SampleLayout::FixedRate { start_time, .. } => start_time,
            // Non-empty by construction.
            SampleLayout::Timed => self.samples.first().map_or(0.0, |s| s.time),
        }
    }

    /// Time of the last sample. For fixed-rate series this is
    /// `start_time + (len - 1) * frequency`.
    pub fn end_time(&self) -> f64 {
        match self.layout {
            SampleLayout::FixedRate {
                start_time,
                frequency,
            } => start_time + (self.samples.len() - 1) as f64 * frequency,
            SampleLayout::Timed => self.samples.last().map_or(0.0, |s| s.time),
        }
    }
}

impl TryFrom<TrackRecord> for Track {
    type Error = TrackError;

    fn try_from(record: TrackRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

fn check_path(path: &TrackPath) -> Result<(), TrackError> {
    if path.is_empty() {
        return Err(TrackError::EmptyPath);
    }
    Ok(())
}

fn check_times(samples: &[Sample]) -> Result<(), TrackError> {
    if samples.is_empty() {
        return Err(TrackError::EmptyData);
    }
    let mut previous = f64::NEG_INFINITY;
    for (i, s) in samples.iter().enumerate() {
        if !s.time.is_finite() {
            return Err(TrackError::NonFiniteTime {
                sample: i,
                time: s.time,
            });
        }
        if s.time < previous {
            return Err(TrackError::TimeReversed {
                sample: i,
                previous,
                time: s.time,
            });
        }
        previous = s.time;
    }
    Ok(())
}

fn check_values(samples: &[Sample], interpolation: Interpolation) -> Result<(), TrackError> {
    for (i, s) in samples.iter().enumerate() {
        match interpolation {
            Interpolation::Step => {}
            Interpolation::Linear if !is_numeric(&s.value) => {
                return Err(TrackError::NonNumericValue { sample: i });
            }
            Interpolation::CircularLinear if !s.value.is_number() => {
                return Err(TrackError::NonScalarAngle { sample: i });
            }
            _ => {}
        }
    }
    Ok(())
}
