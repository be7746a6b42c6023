//! Recorded attribute tracks for Vantage replays.
//!
//! A [`Track`] is one attribute's recorded time series (an actor's
//! position, heading, health, a buff's stack count) together with the
//! policy used to sample it between recorded points.
//!
//! # Sampling
//!
//! - [`Interpolation`] selects how two neighbouring samples blend:
//!   step-hold, linear, or circular-linear for angles.
//! - [`Calculator`] selects how the neighbouring samples are found:
//!   by bracket search over recorded times, or by index arithmetic for
//!   fixed-rate series.
//!
//! Both are plain enums dispatching through function tables; tracks
//! carry no behaviour of their own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod calculator;
pub mod error;
pub mod interpolate;
pub mod track;

pub use calculator::Calculator;
pub use error::TrackError;
pub use interpolate::Interpolation;
pub use track::{Sample, SampleLayout, SampleRecord, Track, TrackRecord, UpdateKind};
