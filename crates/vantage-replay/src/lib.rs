//! Replay data and frame reconstruction for Vantage.
//!
//! A [`ReplayData`] is loaded once from a recording and never mutated.
//! [`build_frame`] turns it into a [`Frame`]: a complete snapshot of
//! every actor's state at one instant.
//!
//! # Architecture
//!
//! - [`ReplayData`] validates tracks and base state at load time, so
//!   frame building never fails
//! - [`build_frame`] deep-copies the base state and writes every
//!   track's sampled value at its path
//! - [`ActorView`] gives typed read access to one actor in a frame
//!
//! Frames are rebuilt from scratch for every query. Nothing carries
//! over from one frame to the next.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actor;
pub mod error;
pub mod frame;
pub mod load;
pub mod types;

pub use actor::{ActorKind, ActorStatus, ActorView};
pub use error::ReplayError;
pub use frame::{build_frame, Frame};
pub use types::{ReplayData, ReplayInfo, ReplayRecord};
