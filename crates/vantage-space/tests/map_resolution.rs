//! Catalog-driven map resolution, projection and picking.

use vantage_core::{MapId, Position, RenderPoint};
use vantage_space::{pick_nearest, MapCatalog, MapSet, Selection, SpaceError};

// Three levels on a 400x600 canvas: each slot is 400x200 and the square
// images are pillarboxed to 200x200 at x 100..300. The world y axis is
// flipped relative to the image.
const CATALOG: &str = r#"{
    "Xera": [
        {"image": "img/xera-lower.png",
         "worldCoords": {"left": -5000, "right": 5000, "top": 5000, "bottom": -5000},
         "imageCoords": {"left": 0, "right": 1024, "top": 0, "bottom": 1024},
         "heightRange": {"min": 0, "max": 100}},
        {"image": "img/xera-upper.png",
         "worldCoords": {"left": -5000, "right": 5000, "top": 5000, "bottom": -5000},
         "imageCoords": {"left": 0, "right": 1024, "top": 0, "bottom": 1024},
         "heightRange": {"min": 100, "max": 200}},
        {"image": "img/xera-overview.png",
         "worldCoords": {"left": -5000, "right": 5000, "top": 5000, "bottom": -5000},
         "imageCoords": {"left": 0, "right": 1024, "top": 0, "bottom": 1024}}
    ],
    "Broken": [
        {"image": "img/broken.png",
         "worldCoords": {"left": 0, "right": 10, "top": 0, "bottom": 10},
         "imageCoords": {"left": 0, "right": 10, "top": 0, "bottom": 10},
         "heightRange": {"min": 5, "max": 5}},
        {"image": "img/other.png",
         "worldCoords": {"left": 0, "right": 10, "top": 0, "bottom": 10},
         "imageCoords": {"left": 0, "right": 10, "top": 0, "bottom": 10}}
    ]
}"#;

fn xera() -> MapSet {
    MapCatalog::from_json_str(CATALOG)
        .unwrap()
        .map_set("Xera", 400.0, 600.0)
        .unwrap()
}

#[test]
fn catalog_keeps_encounter_order() {
    let catalog = MapCatalog::from_json_str(CATALOG).unwrap();
    assert_eq!(catalog.encounters().collect::<Vec<_>>(), vec!["Xera", "Broken"]);
}

#[test]
fn layout_stacks_levels_in_registration_order() {
    let maps = xera();
    for (id, map) in maps.iter() {
        let dst = map.image_dst();
        let top = id.index() as f64 * 200.0;
        assert_eq!((dst.left, dst.right), (100.0, 300.0));
        assert_eq!((dst.top, dst.bottom), (top, top + 200.0));
    }
}

#[test]
fn height_resolution_is_strict_with_open_fallback() {
    let maps = xera();
    let at = |z| maps.resolve(Position::new(0.0, 0.0, z));
    assert_eq!(at(50.0), Some(MapId(0)));
    assert_eq!(at(150.0), Some(MapId(1)));
    // Boundaries belong to neither level, so the unbounded overview wins.
    assert_eq!(at(100.0), Some(MapId(2)));
    assert_eq!(at(0.0), Some(MapId(2)));
    assert_eq!(at(-40.0), Some(MapId(2)));
}

#[test]
fn projection_follows_flipped_world_axis() {
    let maps = xera();
    let centre = maps.project(MapId(1), Position::new(0.0, 0.0, 150.0)).unwrap();
    assert_eq!(centre, RenderPoint::new(200.0, 300.0));
    let corner = maps
        .project(MapId(0), Position::new(-5000.0, 5000.0, 50.0))
        .unwrap();
    assert_eq!(corner, RenderPoint::new(100.0, 0.0));
    assert_eq!(maps.scale_factor(MapId(0)), Some(0.6));
}

#[test]
fn clicks_outside_any_map_hit_nothing() {
    let maps = xera();
    assert_eq!(maps.map_at(250.0, 350.0), Some(MapId(1)));
    assert_eq!(maps.map_at(50.0, 100.0), None);
    assert_eq!(maps.map_at(300.0, 100.0), None);
}

#[test]
fn relayout_moves_destinations() {
    let mut maps = xera();
    maps.layout(300.0, 1200.0).unwrap();
    let dst = *maps.get(MapId(2)).unwrap().image_dst();
    // Slots are 300x400; images fill the width and are letterboxed.
    assert_eq!((dst.left, dst.right), (0.0, 300.0));
    assert_eq!((dst.top, dst.bottom), (850.0, 1150.0));
    assert!(matches!(
        maps.layout(0.0, 10.0),
        Err(SpaceError::InvalidCanvas { .. })
    ));
}

#[test]
fn pick_then_select_round() {
    let maps = xera();
    let actors = [
        ("low", Position::new(0.0, 0.0, 50.0)),
        ("high", Position::new(0.0, 0.0, 150.0)),
    ];
    let mut selection = Selection::new();

    let hit = pick_nearest(&maps, actors, RenderPoint::new(200.5, 300.5), 2.0);
    assert_eq!(hit, Some("high"));
    assert!(selection.apply_pick(hit));
    assert!(selection.is_selected("high"));

    // Same spot on the overview: nobody resolves there.
    let miss = pick_nearest(&maps, actors, RenderPoint::new(200.0, 500.0), 2.0);
    assert_eq!(miss, None);
    assert!(selection.apply_pick(miss));
    assert!(selection.selected().is_none());
}

#[test]
fn invalid_levels_and_unknown_encounters_are_rejected() {
    let catalog = MapCatalog::from_json_str(CATALOG).unwrap();
    assert!(matches!(
        catalog.map_set("Broken", 400.0, 600.0),
        Err(SpaceError::InvalidHeightRange { index: 0, .. })
    ));
    assert!(matches!(
        catalog.map_set("Deimos", 400.0, 600.0),
        Err(SpaceError::UnknownEncounter { .. })
    ));
}
