//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifies an actor (player, boss, add) within a replay.
///
/// Actor ids are the keys of the replay's base state and the first
/// segment of most track paths. Iteration order of actors always
/// follows the order in which the base state declared them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for ActorId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl Borrow<str> for ActorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ActorId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActorId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifies a map (arena level) within an encounter.
///
/// `MapId(n)` is the n-th map in registration order. Registration order
/// is significant: overlapping height ranges resolve to the lowest id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(pub u32);

impl MapId {
    /// Index of this map in its owning collection.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MapId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
