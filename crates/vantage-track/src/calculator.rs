//! Sampling a track at an arbitrary time.
//!
//! Two calculators exist, selected per track by [`Track::calculator`]:
//!
//! - [`Calculator::Timed`] finds the bracketing pair by binary search over
//!   recorded times. Before the first sample the attribute is unset; at or
//!   past the last sample the last value is held.
//! - [`Calculator::FixedRate`] indexes directly into an evenly spaced
//!   series. Past `end_time` the last value is held.
//!
//! The fixed-rate path exists for series recorded on a regular grid;
//! none of the recordings seen so far use it.

use serde_json::Value;

use crate::track::{SampleLayout, Track, UpdateKind};

/// Samples a track at a time. `None` leaves the attribute unset.
pub type CalcFn = fn(&Track, f64) -> Option<Value>;

/// Which sampling strategy a track uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Calculator {
    /// Bracket search over recorded sample times.
    Timed,
    /// Index arithmetic over an evenly spaced series.
    FixedRate,
}

impl Calculator {
    /// The sampling function for this strategy.
    pub fn func(self) -> CalcFn {
        match self {
            Self::Timed => sample_timed,
            Self::FixedRate => sample_fixed_rate,
        }
    }
}

impl Track {
    /// The calculator implied by this track's update kind and layout.
    pub fn calculator(&self) -> Calculator {
        match (self.update(), self.layout()) {
            (UpdateKind::Absolute, SampleLayout::FixedRate { .. }) => Calculator::FixedRate,
            _ => Calculator::Timed,
        }
    }

    /// The track's value at `time`, or `None` if the attribute is not
    /// yet defined at that time.
    pub fn sample(&self, time: f64) -> Option<Value> {
        (self.calculator().func())(self, time)
    }
}

/// Bracket-search sampling.
///
/// A query that lands exactly on a sample time returns the first sample
/// of that run of equal times. Otherwise finds the unique `i` with
/// `samples[i-1].time < time < samples[i].time` and blends the pair, so
/// no zero-length interval is ever interpolated.
pub fn sample_timed(track: &Track, time: f64) -> Option<Value> {
    let samples = track.samples();
    let first = samples.first()?;
    let last = samples.last()?;
    if time.is_nan() || time < first.time {
        return None;
    }
    if time > last.time {
        return Some(last.value.clone());
    }
    // first.time <= time <= last.time, so i < len.
    let i = samples.partition_point(|s| s.time < time);
    if samples[i].time == time {
        return Some(samples[i].value.clone());
    }
    // samples[i-1].time < time < samples[i].time, and i >= 1.
    let (a, b) = (&samples[i - 1], &samples[i]);
    let t = (time - a.time) / (b.time - a.time);
    Some((track.interpolation().sample_fn())(&a.value, &b.value, t))
}

/// Fixed-rate series sampling.
///
/// `normalised = (time - start_time) / frequency`; the floor and ceil of
/// `normalised` bracket the value and its fractional part is the blend
/// factor. Exactly on a sample, floor and ceil coincide.
pub fn sample_fixed_rate(track: &Track, time: f64) -> Option<Value> {
    let SampleLayout::FixedRate {
        start_time,
        frequency,
    } = track.layout()
    else {
        return sample_timed(track, time);
    };
    let samples = track.samples();
    let last_index = samples.len().checked_sub(1)?;
    if time.is_nan() || time < start_time {
        return None;
    }
    if time > track.end_time() {
        return Some(samples[last_index].value.clone());
    }
    let normalised = (time - start_time) / frequency;
    let lo = (normalised.floor() as usize).min(last_index);
    let hi = (normalised.ceil() as usize).min(last_index);
    let t = normalised - lo as f64;
    Some((track.interpolation().sample_fn())(
        &samples[lo].value,
        &samples[hi].value,
        t,
    ))
}
