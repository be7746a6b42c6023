//! Axis-aligned boxes and height ranges.

use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its edges.
///
/// World boxes may be flipped (`right < left` or `bottom < top`) when
/// the world axis runs opposite to the image axis, so [`width`] and
/// [`height`] are signed.
///
/// [`width`]: AreaBox::width
/// [`height`]: AreaBox::height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaBox {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl AreaBox {
    /// Construct a box from its edges.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// `right - left`.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `bottom - top`.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Half-open containment: `left <= x < right` and `top <= y < bottom`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }
}

/// The band of world heights a map level covers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    /// Lower bound, exclusive.
    pub min: f64,
    /// Upper bound, exclusive.
    pub max: f64,
}

impl HeightRange {
    /// Construct a height range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Strict containment: `min < z < max`. A height exactly on either
    /// bound is outside.
    pub fn contains(&self, z: f64) -> bool {
        self.min < z && z < self.max
    }
}
