//! Sample blending policies.
//!
//! Scalar kernels ([`floor`], [`lerp`], [`slerp`]) operate on `f64`.
//! [`Interpolation::sample_fn`] lifts them to state-tree values so a
//! track can blend scalars and structured values (`{x, y, z}`) alike.

use std::f64::consts::{PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Blends two neighbouring sample values at fraction `t` in `[0, 1)`.
pub type SampleFn = fn(&Value, &Value, f64) -> Value;

/// How a track blends its two bracketing samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interpolation {
    /// Hold the left sample unchanged.
    #[default]
    #[serde(rename = "floor", alias = "step")]
    Step,
    /// Component-wise `a + (b - a) * t`.
    #[serde(rename = "lerp", alias = "linear")]
    Linear,
    /// Linear over an angle in radians, across the shorter arc.
    #[serde(rename = "slerp", alias = "circular-linear")]
    CircularLinear,
}

impl Interpolation {
    /// The value-level blend function for this policy.
    pub fn sample_fn(self) -> SampleFn {
        match self {
            Self::Step => step_value,
            Self::Linear => lerp_value,
            Self::CircularLinear => slerp_value,
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step => write!(f, "step"),
            Self::Linear => write!(f, "linear"),
            Self::CircularLinear => write!(f, "circular-linear"),
        }
    }
}

/// Step-hold: always the left value.
pub fn floor(a: f64, _b: f64, _t: f64) -> f64 {
    a
}

/// Linear interpolation.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Circular-linear interpolation of angles in radians.
///
/// When the endpoints are more than π apart the nearer endpoint is
/// lifted by 2π so the blend runs across the shorter arc. The result
/// is always normalized into `[0, 2π)`.
pub fn slerp(a: f64, b: f64, t: f64) -> f64 {
    let (a, b) = if a - b > PI {
        (a, b + TAU)
    } else if b - a > PI {
        (a + TAU, b)
    } else {
        (a, b)
    };
    let r = lerp(a, b, t).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if r >= TAU {
        0.0
    } else {
        r
    }
}

fn step_value(a: &Value, _b: &Value, _t: f64) -> Value {
    a.clone()
}

fn lerp_value(a: &Value, b: &Value, t: f64) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Value::from(lerp(x, y, t)),
            _ => a.clone(),
        },
        (Value::Object(xs), Value::Object(ys)) => Value::Object(
            xs.iter()
                .map(|(k, x)| {
                    let blended = match ys.get(k) {
                        Some(y) => lerp_value(x, y, t),
                        None => x.clone(),
                    };
                    (k.clone(), blended)
                })
                .collect(),
        ),
        (Value::Array(xs), Value::Array(ys)) => Value::Array(
            xs.iter()
                .enumerate()
                .map(|(i, x)| match ys.get(i) {
                    Some(y) => lerp_value(x, y, t),
                    None => x.clone(),
                })
                .collect(),
        ),
        _ => a.clone(),
    }
}

fn slerp_value(a: &Value, b: &Value, t: f64) -> Value {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => Value::from(slerp(x, y, t)),
        _ => a.clone(),
    }
}

/// Returns `true` if every leaf of `value` is a number.
///
/// Numbers, and objects/arrays built only from numbers, can be
/// blended linearly.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::Object(map) => map.values().all(is_numeric),
        Value::Array(items) => items.iter().all(is_numeric),
        _ => false,
    }
}
