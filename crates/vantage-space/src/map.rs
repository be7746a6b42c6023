//! Maps, map sets and render layout.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vantage_core::{MapId, Position, RenderPoint};

use crate::area::{AreaBox, HeightRange};
use crate::error::SpaceError;

/// Multiplier applied to every map's pixels-per-world-unit ratio to
/// size markers. Matches the recorded data's world units.
pub const DEFAULT_MARKER_SCALE: f64 = 30.0;

/// Map metadata as recorded in a map catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    /// Image location, handed to the asset loader untouched.
    pub image: String,
    /// World-space box the image covers.
    pub world_coords: AreaBox,
    /// Region of the image to draw.
    pub image_coords: AreaBox,
    /// Height band of this level in a multi-level arena.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_range: Option<HeightRange>,
}

/// One renderable surface with its current destination box.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    info: MapInfo,
    dst: AreaBox,
}

impl Map {
    /// Image location.
    pub fn image(&self) -> &str {
        &self.info.image
    }

    /// World-space box.
    pub fn coords(&self) -> &AreaBox {
        &self.info.world_coords
    }

    /// Source region of the image.
    pub fn image_src(&self) -> &AreaBox {
        &self.info.image_coords
    }

    /// Where the map is drawn on the render surface.
    pub fn image_dst(&self) -> &AreaBox {
        &self.dst
    }

    /// Height band, if any.
    pub fn height_range(&self) -> Option<HeightRange> {
        self.info.height_range
    }

    /// The recorded metadata.
    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    /// Affine transform from the world box to the destination box.
    pub fn project(&self, x: f64, y: f64) -> RenderPoint {
        let world = &self.info.world_coords;
        let dst = &self.dst;
        RenderPoint::new(
            (x - world.left) / world.width() * dst.width() + dst.left,
            (y - world.top) / world.height() * dst.height() + dst.top,
        )
    }

    /// Marker scale: `marker_scale * dst.width / |world.width|`.
    pub fn scale(&self, marker_scale: f64) -> f64 {
        marker_scale * self.dst.width() / self.info.world_coords.width().abs()
    }

    /// Letterboxed destination for map `index` of `count` stacked in a
    /// vertical column on a `canvas_width` by `canvas_height` surface.
    ///
    /// Each map gets `canvas_height / count` of height. The image keeps
    /// its aspect ratio and is centred on the free axis; computed extents
    /// and offsets are truncated to whole units.
    fn layout_box(
        &self,
        index: usize,
        count: usize,
        canvas_width: f64,
        canvas_height: f64,
    ) -> AreaBox {
        let available = canvas_height / count as f64;
        let src = &self.info.image_coords;
        let image_aspect = src.width() / src.height();
        let canvas_aspect = canvas_width / available;
        let (offset_x, mut offset_y, width, height);
        if canvas_aspect > image_aspect {
            width = (image_aspect * available).trunc();
            height = available;
            offset_x = ((canvas_width - width) / 2.0).trunc();
            offset_y = 0.0;
        } else {
            width = canvas_width;
            height = (canvas_width / image_aspect).trunc();
            offset_x = 0.0;
            offset_y = ((available - height) / 2.0).trunc();
        }
        offset_y += index as f64 * available;
        AreaBox::new(offset_x, offset_x + width, offset_y, offset_y + height)
    }
}

/// The maps of one encounter, in registration order.
///
/// Registration order is significant: it breaks ties between
/// overlapping height ranges and between overlapping destination boxes.
#[derive(Clone, Debug, PartialEq)]
pub struct MapSet {
    maps: Vec<Map>,
    marker_scale: f64,
    canvas: (f64, f64),
}

impl MapSet {
    /// Validate map metadata and lay it out on a canvas.
    pub fn new(
        infos: Vec<MapInfo>,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<Self, SpaceError> {
        if infos.is_empty() {
            return Err(SpaceError::Empty);
        }
        for (index, info) in infos.iter().enumerate() {
            check_info(index, info)?;
        }
        let mut set = Self {
            maps: infos
                .into_iter()
                .map(|info| Map {
                    info,
                    dst: AreaBox::default(),
                })
                .collect(),
            marker_scale: DEFAULT_MARKER_SCALE,
            canvas: (0.0, 0.0),
        };
        set.layout(canvas_width, canvas_height)?;
        Ok(set)
    }

    /// Override the marker scale multiplier.
    pub fn with_marker_scale(mut self, marker_scale: f64) -> Self {
        self.marker_scale = marker_scale;
        self
    }

    /// Recompute every destination box for a new canvas size.
    pub fn layout(&mut self, canvas_width: f64, canvas_height: f64) -> Result<(), SpaceError> {
        if !(canvas_width.is_finite() && canvas_height.is_finite())
            || canvas_width <= 0.0
            || canvas_height <= 0.0
        {
            return Err(SpaceError::InvalidCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }
        let count = self.maps.len();
        for index in 0..count {
            let dst = self.maps[index].layout_box(index, count, canvas_width, canvas_height);
            self.maps[index].dst = dst;
        }
        self.canvas = (canvas_width, canvas_height);
        debug!(maps = count, canvas_width, canvas_height, "map layout");
        Ok(())
    }

    /// Number of maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// The map with this id.
    pub fn get(&self, id: MapId) -> Option<&Map> {
        self.maps.get(id.index())
    }

    /// Maps with their ids, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MapId, &Map)> + '_ {
        self.maps
            .iter()
            .enumerate()
            .map(|(i, map)| (MapId(i as u32), map))
    }

    /// The marker scale multiplier.
    pub fn marker_scale(&self) -> f64 {
        self.marker_scale
    }

    /// The canvas size of the last layout.
    pub fn canvas(&self) -> (f64, f64) {
        self.canvas
    }

    /// Which map a world position is on.
    ///
    /// A lone map always matches. Otherwise the first map whose height
    /// range strictly contains `z` wins; a map without a height range
    /// matches any `z`. A position with no `z` only matches maps without
    /// a height range. `None` means the actor is not drawn this frame.
    pub fn resolve(&self, position: Position) -> Option<MapId> {
        if self.maps.len() == 1 {
            return Some(MapId(0));
        }
        self.iter()
            .find(|(_, map)| match (map.height_range(), position.z) {
                (None, _) => true,
                (Some(range), Some(z)) => range.contains(z),
                (Some(_), None) => false,
            })
            .map(|(id, _)| id)
    }

    /// Project a world position onto map `id`.
    pub fn project(&self, id: MapId, position: Position) -> Option<RenderPoint> {
        Some(self.get(id)?.project(position.x, position.y))
    }

    /// Marker scale of map `id`.
    pub fn scale_factor(&self, id: MapId) -> Option<f64> {
        Some(self.get(id)?.scale(self.marker_scale))
    }

    /// The first map whose destination box contains the render point.
    pub fn map_at(&self, x: f64, y: f64) -> Option<MapId> {
        self.iter()
            .find(|(_, map)| map.image_dst().contains(x, y))
            .map(|(id, _)| id)
    }
}

fn check_info(index: usize, info: &MapInfo) -> Result<(), SpaceError> {
    let world = &info.world_coords;
    if !world.is_finite() || world.width() == 0.0 || world.height() == 0.0 {
        return Err(SpaceError::DegenerateWorldBox { index });
    }
    let src = &info.image_coords;
    if !src.is_finite() || src.width() <= 0.0 || src.height() <= 0.0 {
        return Err(SpaceError::DegenerateImageBox { index });
    }
    if let Some(HeightRange { min, max }) = info.height_range {
        if !(min.is_finite() && max.is_finite()) || min >= max {
            return Err(SpaceError::InvalidHeightRange { index, min, max });
        }
    }
    Ok(())
}
