//! World-space and render-space points.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An actor position in world space.
///
/// `z` selects between stacked arena levels. It is `None` when the
/// recording only carries planar coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// World x coordinate.
    pub x: f64,
    /// World y coordinate.
    pub y: f64,
    /// World height, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Position {
    /// Construct a position from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Construct a position with no recorded height.
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Read a position out of a state-tree value.
    ///
    /// Accepts `{"x": .., "y": .., "z": ..}` objects (with `z` optional)
    /// and `[x, y]` / `[x, y, z]` arrays. Returns `None` for anything
    /// else, including non-finite components.
    pub fn from_value(value: &Value) -> Option<Self> {
        let (x, y, z) = match value {
            Value::Object(obj) => (
                obj.get("x")?.as_f64()?,
                obj.get("y")?.as_f64()?,
                match obj.get("z") {
                    Some(z) => Some(z.as_f64()?),
                    None => None,
                },
            ),
            Value::Array(items) if items.len() == 2 || items.len() == 3 => (
                items[0].as_f64()?,
                items[1].as_f64()?,
                match items.get(2) {
                    Some(z) => Some(z.as_f64()?),
                    None => None,
                },
            ),
            _ => return None,
        };
        if x.is_finite() && y.is_finite() && z.is_none_or(f64::is_finite) {
            Some(Self { x, y, z })
        } else {
            None
        }
    }
}

/// A point on the render surface, in render units (canvas pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderPoint {
    /// Horizontal render coordinate.
    pub x: f64,
    /// Vertical render coordinate.
    pub y: f64,
}

impl RenderPoint {
    /// Construct a render point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(self, other: RenderPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn position_from_object_leaves_missing_z_unset() {
        let p = Position::from_value(&json!({"x": 1.5, "y": -2})).unwrap();
        assert_eq!(p, Position::planar(1.5, -2.0));
        assert_eq!(p.z, None);
        assert!(Position::from_value(&json!({"x": 0, "y": 0, "z": null})).is_none());
    }

    #[test]
    fn position_from_array() {
        let p = Position::from_value(&json!([1, 2, 3])).unwrap();
        assert_eq!(p, Position::new(1.0, 2.0, 3.0));
        assert_eq!(Position::from_value(&json!([1, 2])), Some(Position::planar(1.0, 2.0)));
        assert!(Position::from_value(&json!([1])).is_none());
    }

    #[test]
    fn position_rejects_non_numeric() {
        assert!(Position::from_value(&json!({"x": "a", "y": 0})).is_none());
        assert!(Position::from_value(&json!("here")).is_none());
    }

    #[test]
    fn distance_sq_is_symmetric() {
        let a = RenderPoint::new(0.0, 0.0);
        let b = RenderPoint::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(b.distance_sq(a), 25.0);
    }
}
