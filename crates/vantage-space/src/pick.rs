//! Nearest-actor picking in render space.

use vantage_core::{MapId, Position, RenderPoint};

use crate::map::MapSet;

/// Squared pick radius on map `id`: `(scale * dot_size)^2`.
pub fn pick_radius_sq(maps: &MapSet, id: MapId, dot_size: f64) -> Option<f64> {
    let reach = maps.scale_factor(id)? * dot_size;
    Some(reach * reach)
}

/// The actor nearest to a click, if any is within the pick radius.
///
/// The click first selects a map by destination box. Only actors whose
/// position resolves to that same map are candidates. Distances are
/// squared Euclidean in render space; the nearest candidate strictly
/// inside the radius wins, and among equidistant candidates the first
/// in iteration order wins.
///
/// `None` means the click should clear the selection: it missed every
/// map, or hit a map with no actor close enough.
pub fn pick_nearest<'a, I>(
    maps: &MapSet,
    actors: I,
    click: RenderPoint,
    dot_size: f64,
) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Position)>,
{
    let clicked = maps.map_at(click.x, click.y)?;
    let map = maps.get(clicked)?;
    let mut best_dist = pick_radius_sq(maps, clicked, dot_size)?;
    let mut best = None;
    for (id, position) in actors {
        if maps.resolve(position) != Some(clicked) {
            continue;
        }
        let dist = map.project(position.x, position.y).distance_sq(click);
        if dist < best_dist {
            best = Some(id);
            best_dist = dist;
        }
    }
    best
}
