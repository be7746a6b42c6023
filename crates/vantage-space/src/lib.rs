//! Spatial resolution for Vantage replays.
//!
//! An encounter is drawn on one or more [`Map`]s, each a renderable
//! surface with its own world-to-render mapping. Multi-level arenas
//! stack several maps and tell them apart by height.
//!
//! # Queries
//!
//! - [`MapSet::resolve`]: which map an actor at a world position is on
//! - [`MapSet::project`]: world position to render point on that map
//! - [`MapSet::map_at`]: which map a render point falls inside
//! - [`pick_nearest`]: the actor closest to a click, within the pick radius
//!
//! [`Selection`] holds the single selected actor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod catalog;
pub mod error;
pub mod map;
pub mod pick;
pub mod selection;

pub use area::{AreaBox, HeightRange};
pub use catalog::MapCatalog;
pub use error::SpaceError;
pub use map::{Map, MapInfo, MapSet, DEFAULT_MARKER_SCALE};
pub use pick::{pick_nearest, pick_radius_sq};
pub use selection::Selection;
