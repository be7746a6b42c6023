//! Per-encounter map metadata.

use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SpaceError;
use crate::map::{MapInfo, MapSet};

/// Encounter name to its maps, in registration order.
///
/// The JSON form is an object keyed by encounter:
///
/// ```
/// use vantage_space::MapCatalog;
///
/// let catalog = MapCatalog::from_json_str(r#"{
///     "Deimos": [{
///         "image": "img/deimos.png",
///         "worldCoords": {"left": -5000, "right": 5000, "top": 5000, "bottom": -5000},
///         "imageCoords": {"left": 0, "right": 1024, "top": 0, "bottom": 1024}
///     }]
/// }"#).unwrap();
/// assert_eq!(catalog.maps("Deimos").map(<[_]>::len), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapCatalog {
    encounters: IndexMap<String, Vec<MapInfo>>,
}

impl MapCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SpaceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a catalog from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SpaceError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Register (or replace) the maps of an encounter.
    pub fn insert(&mut self, encounter: impl Into<String>, maps: Vec<MapInfo>) {
        self.encounters.insert(encounter.into(), maps);
    }

    /// The maps of an encounter.
    pub fn maps(&self, encounter: &str) -> Option<&[MapInfo]> {
        self.encounters.get(encounter).map(Vec::as_slice)
    }

    /// Encounter names, in catalog order.
    pub fn encounters(&self) -> impl Iterator<Item = &str> + '_ {
        self.encounters.keys().map(String::as_str)
    }

    /// Build the laid-out map set for an encounter.
    pub fn map_set(
        &self,
        encounter: &str,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<MapSet, SpaceError> {
        let maps = self
            .maps(encounter)
            .ok_or_else(|| SpaceError::UnknownEncounter {
                encounter: encounter.to_string(),
            })?;
        MapSet::new(maps.to_vec(), canvas_width, canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaBox;

    fn info(image: &str) -> MapInfo {
        MapInfo {
            image: image.into(),
            world_coords: AreaBox::new(0.0, 10.0, 0.0, 10.0),
            image_coords: AreaBox::new(0.0, 10.0, 0.0, 10.0),
            height_range: None,
        }
    }

    #[test]
    fn keeps_encounter_order() {
        let mut catalog = MapCatalog::new();
        catalog.insert("Xera", vec![info("a.png")]);
        catalog.insert("Deimos", vec![info("b.png")]);
        assert_eq!(catalog.encounters().collect::<Vec<_>>(), vec!["Xera", "Deimos"]);
    }

    #[test]
    fn unknown_encounter_is_an_error() {
        let catalog = MapCatalog::new();
        assert!(matches!(
            catalog.map_set("Deimos", 800.0, 600.0),
            Err(SpaceError::UnknownEncounter { encounter }) if encounter == "Deimos"
        ));
    }

    #[test]
    fn builds_map_set() {
        let mut catalog = MapCatalog::new();
        catalog.insert("Xera", vec![info("lower.png"), info("upper.png")]);
        let set = catalog.map_set("Xera", 800.0, 600.0).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn round_trips_through_json() {
        let mut catalog = MapCatalog::new();
        catalog.insert("Xera", vec![info("lower.png")]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(MapCatalog::from_json_str(&json).unwrap(), catalog);
    }
}
