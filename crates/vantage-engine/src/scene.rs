//! Render-ready placement of actors and maps.
//!
//! The engine does not draw. [`Scene::build`] resolves every actor with a
//! position onto a map, projects it and picks a marker; a renderer only
//! has to paint what it is given.

use std::f64::consts::PI;

use tracing::debug;
use vantage_core::{ActorId, MapId, RenderPoint};
use vantage_replay::{ActorStatus, Frame};
use vantage_space::{AreaBox, MapSet, Selection};

use crate::config::PlaybackConfig;

/// Angle between a heading triangle's nose and each wing.
pub const BOID_WING_ANGLE: f64 = 0.8 * PI;

/// Selection ring stroke width per unit of map scale.
pub const RING_LINE_WIDTH: f64 = 0.4;

/// How an actor is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerKind {
    /// A filled circle, for actors without a heading.
    Dot {
        /// Radius in render units.
        radius: f64,
    },
    /// A filled triangle pointing along the heading.
    Boid {
        /// Nose, then the two wings.
        vertices: [RenderPoint; 3],
    },
    /// The downed icon, centred on the actor.
    Down {
        /// Edge length in render units.
        size: f64,
    },
    /// The dead icon, centred on the actor.
    Dead {
        /// Edge length in render units.
        size: f64,
    },
}

/// One actor, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePlacement {
    /// Actor id.
    pub id: ActorId,
    /// Map the actor is drawn on.
    pub map: MapId,
    /// Projected position.
    pub point: RenderPoint,
    /// The map's marker scale.
    pub scale: f64,
    /// Marker geometry.
    pub marker: MarkerKind,
    /// Fill colour, if recorded.
    pub color: Option<String>,
}

/// One map backdrop: draw `src` of `image` into `dst`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapBackdrop {
    /// Map id.
    pub map: MapId,
    /// Image location.
    pub image: String,
    /// Source region of the image.
    pub src: AreaBox,
    /// Destination on the canvas.
    pub dst: AreaBox,
}

/// The ring around the selected actor.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionRing {
    /// Selected actor.
    pub id: ActorId,
    /// Centre in render units.
    pub center: RenderPoint,
    /// Radius in render units.
    pub radius: f64,
    /// Stroke width in render units.
    pub line_width: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Map backdrops, in registration order.
    pub backdrops: Vec<MapBackdrop>,
    /// Actors, in frame order.
    pub placements: Vec<ScenePlacement>,
    /// Ring around the selected actor, if it is drawn this frame.
    pub ring: Option<SelectionRing>,
}

impl Scene {
    /// Lay out a frame.
    ///
    /// Actors without a position, or whose height matches no map, are
    /// left out of this frame.
    pub fn build(
        frame: &Frame,
        maps: &MapSet,
        selection: &Selection,
        config: &PlaybackConfig,
    ) -> Self {
        let backdrops = maps
            .iter()
            .map(|(id, map)| MapBackdrop {
                map: id,
                image: map.image().to_string(),
                src: *map.image_src(),
                dst: *map.image_dst(),
            })
            .collect();

        let mut placements = Vec::new();
        let mut ring = None;
        for actor in frame.actors() {
            let Some(position) = actor.position() else {
                continue;
            };
            let Some(map) = maps.resolve(position) else {
                debug!(actor = actor.id(), z = ?position.z, "no map at height");
                continue;
            };
            let (Some(point), Some(scale)) =
                (maps.project(map, position), maps.scale_factor(map))
            else {
                continue;
            };
            let marker = match actor.status() {
                ActorStatus::Down => MarkerKind::Down {
                    size: config.icon_size * scale,
                },
                ActorStatus::Dead => MarkerKind::Dead {
                    size: config.icon_size * scale,
                },
                ActorStatus::Normal => match actor.heading() {
                    Some(heading) => MarkerKind::Boid {
                        vertices: boid_vertices(point, heading, config.boid_size * scale),
                    },
                    None => MarkerKind::Dot {
                        radius: config.dot_size * scale,
                    },
                },
            };
            if selection.is_selected(actor.id()) {
                ring = Some(SelectionRing {
                    id: ActorId::from(actor.id()),
                    center: point,
                    radius: config.boid_size * scale,
                    line_width: RING_LINE_WIDTH * scale,
                });
            }
            placements.push(ScenePlacement {
                id: ActorId::from(actor.id()),
                map,
                point,
                scale,
                marker,
                color: actor.color().map(str::to_string),
            });
        }
        Self {
            backdrops,
            placements,
            ring,
        }
    }

    /// The placement of one actor, if drawn.
    pub fn placement(&self, id: &str) -> Option<&ScenePlacement> {
        self.placements.iter().find(|p| p.id == id)
    }
}

/// Heading triangle around `center`. Heading 0 points along +y.
pub fn boid_vertices(center: RenderPoint, heading: f64, size: f64) -> [RenderPoint; 3] {
    let vertex = |angle: f64| {
        RenderPoint::new(
            center.x + size * angle.sin(),
            center.y + size * angle.cos(),
        )
    };
    [
        vertex(heading),
        vertex(heading + BOID_WING_ANGLE),
        vertex(heading - BOID_WING_ANGLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_test_utils::fixtures::{position, single_map, skirmish_replay, two_level_maps};
    use vantage_test_utils::{ReplayBuilder, TrackBuilder};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // 100x100 world on a 400x400 canvas: scale = 30 * 400 / 100 = 120.
    fn maps() -> MapSet {
        MapSet::new(single_map(), 400.0, 400.0).unwrap()
    }

    #[test]
    fn markers_follow_state_and_heading() {
        let replay = skirmish_replay();
        let config = PlaybackConfig::default();
        let scene = Scene::build(&replay.frame_at(7.0), &maps(), &Selection::new(), &config);

        let alice = scene.placement("Player.1").unwrap();
        assert!(matches!(alice.marker, MarkerKind::Boid { .. }));
        assert_eq!(alice.scale, 120.0);

        let bob = scene.placement("Player.2").unwrap();
        assert_eq!(bob.marker, MarkerKind::Down { size: 720.0 });
        assert_eq!(bob.point, RenderPoint::new(80.0, 320.0));

        let boss = scene.placement("Deimos").unwrap();
        assert_eq!(boss.marker, MarkerKind::Dot { radius: 240.0 });
        assert_eq!(boss.color.as_deref(), Some("#ff0000"));
        assert_eq!(scene.backdrops.len(), 1);
    }

    #[test]
    fn boid_points_along_heading() {
        let [nose, left, right] = boid_vertices(RenderPoint::new(0.0, 0.0), 0.0, 1.0);
        assert!(approx(nose.x, 0.0) && approx(nose.y, 1.0));
        assert!(approx(left.x, -right.x) && approx(left.y, right.y));
        assert!(left.y < 0.0);
    }

    #[test]
    fn ring_follows_selected_actor() {
        let replay = skirmish_replay();
        let mut selection = Selection::new();
        selection.select(ActorId::from("Deimos"));
        let scene = Scene::build(
            &replay.frame_at(1.0),
            &maps(),
            &selection,
            &PlaybackConfig::default(),
        );
        let ring = scene.ring.unwrap();
        assert_eq!(ring.center, RenderPoint::new(200.0, 200.0));
        assert_eq!(ring.radius, 300.0);
        assert!(approx(ring.line_width, 48.0));
    }

    #[test]
    fn unresolved_actors_are_left_out() {
        let replay = ReplayBuilder::new("x", 1.0)
            .boss("low", 100.0)
            .boss("edge", 100.0)
            .boss("nowhere", 100.0)
            .track(TrackBuilder::new(["low", "position"]).sample(0.0, position(10.0, 10.0, 50.0)).build())
            .track(TrackBuilder::new(["edge", "position"]).sample(0.0, position(10.0, 10.0, 100.0)).build())
            .build();
        let maps = MapSet::new(two_level_maps(), 400.0, 800.0).unwrap();
        let scene = Scene::build(&replay.frame_at(0.0), &maps, &Selection::new(), &PlaybackConfig::default());
        let ids: Vec<_> = scene.placements.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["low"]);
    }
}
