//! Core types for the Vantage replay playback engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the primitives shared by every other crate in the workspace: actor
//! and map identifiers, world/render geometry, and the nested state
//! tree that tracks write into.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod tree;

pub use error::PathError;
pub use geometry::{Position, RenderPoint};
pub use id::{ActorId, MapId};
pub use tree::{StateTree, TrackPath};
