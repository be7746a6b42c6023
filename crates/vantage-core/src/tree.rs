//! The nested state tree and path-addressed writes.
//!
//! A replay's base state and every reconstructed frame are plain nested
//! JSON objects. Tracks address a single leaf with a [`TrackPath`]
//! (`["Deimos", "position"]`, `["Player.1", "buff", "might"]`) and write
//! through [`set_path`], which creates any missing intermediate objects
//! without disturbing their siblings.

use serde_json::Value;
use smallvec::SmallVec;

use crate::error::PathError;

/// A nested mapping from keys to JSON values. Key order is insertion order.
pub type StateTree = serde_json::Map<String, Value>;

/// Ordered keys locating a leaf in a [`StateTree`].
///
/// Inline capacity covers the common `actor / field / subfield` depth.
pub type TrackPath = SmallVec<[String; 4]>;

/// Walk `parents`, creating empty objects for missing segments, and
/// return the object at the end of the walk.
///
/// Existing objects are reused as-is. A segment that already holds a
/// non-object value blocks the walk with [`PathError::Blocked`].
pub fn ensure_path<'a>(
    tree: &'a mut StateTree,
    parents: &[String],
) -> Result<&'a mut StateTree, PathError> {
    let mut target = tree;
    for (depth, segment) in parents.iter().enumerate() {
        let slot = target
            .entry(segment.as_str())
            .or_insert_with(|| Value::Object(StateTree::new()));
        target = match slot {
            Value::Object(map) => map,
            _ => {
                return Err(PathError::Blocked {
                    segment: segment.clone(),
                    depth,
                })
            }
        };
    }
    Ok(target)
}

/// Assign `value` at `path`, creating intermediate objects as needed.
///
/// Returns the value previously stored at the leaf, if any.
pub fn set_path(
    tree: &mut StateTree,
    path: &[String],
    value: Value,
) -> Result<Option<Value>, PathError> {
    let (key, parents) = path.split_last().ok_or(PathError::Empty)?;
    let target = ensure_path(tree, parents)?;
    Ok(target.insert(key.clone(), value))
}

/// Read the value at `path`, if every segment exists.
pub fn get_path<'a>(tree: &'a StateTree, path: &[String]) -> Option<&'a Value> {
    let (key, parents) = path.split_last()?;
    let mut target = tree;
    for segment in parents {
        target = target.get(segment)?.as_object()?;
    }
    target.get(key)
}

/// Returns `true` if `prefix` is a strict prefix of `path`.
pub fn is_strict_prefix(prefix: &[String], path: &[String]) -> bool {
    prefix.len() < path.len() && path[..prefix.len()] == *prefix
}

/// Build a [`TrackPath`] from string slices.
pub fn track_path<I, S>(segments: I) -> TrackPath
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    segments.into_iter().map(Into::into).collect()
}
