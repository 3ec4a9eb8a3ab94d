//! Global animation parameters and their JSON representation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::EngineError;
use crate::params::{param_f64, param_usize};

/// Default backdrop blur in pixels.
pub const DEFAULT_BLUR_RADIUS: f64 = 90.0;
/// Default disc radius in pixels.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 100.0;
/// Default glow radius in pixels.
pub const DEFAULT_SHADOW_RADIUS: f64 = 10.0;
/// Default population size.
pub const DEFAULT_COUNT: usize = 120;
/// Default repulsion displacement per tick, in pixels.
pub const DEFAULT_SMOOTHNESS: f64 = 7.0;
/// Default drift velocity scale.
pub const DEFAULT_SPEED: f64 = 1.5;

/// Process-wide parameters read by the point field and renderer each frame.
///
/// Use [`Default`] for the stock look. Deserialization fills missing keys
/// from the defaults, so partial JSON config files are valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backdrop blur applied to the whole frame (cosmetic, renderer only).
    pub blur_radius: f64,
    /// Radius of every disc; also the overshoot allowed before wrap-around.
    pub circle_radius: f64,
    /// Glow radius around each disc (cosmetic, renderer only).
    pub shadow_radius: f64,
    /// Number of points.
    pub count: usize,
    /// Pixel displacement per tick for a point sitting on the pointer.
    pub smoothness: f64,
    /// Drift velocity scale; each axis is drawn from `[-0.5, 0.5) * speed`.
    pub speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blur_radius: DEFAULT_BLUR_RADIUS,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            shadow_radius: DEFAULT_SHADOW_RADIUS,
            count: DEFAULT_COUNT,
            smoothness: DEFAULT_SMOOTHNESS,
            speed: DEFAULT_SPEED,
        }
    }
}

impl Settings {
    /// Extracts settings from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self::default().merged(params)
    }

    /// Returns a copy with every key present in `params` overriding `self`.
    pub fn merged(&self, params: &Value) -> Self {
        Self {
            blur_radius: param_f64(params, "blur_radius", self.blur_radius),
            circle_radius: param_f64(params, "circle_radius", self.circle_radius),
            shadow_radius: param_f64(params, "shadow_radius", self.shadow_radius),
            count: param_usize(params, "count", self.count),
            smoothness: param_f64(params, "smoothness", self.smoothness),
            speed: param_f64(params, "speed", self.speed),
        }
    }

    /// Rejects negative or non-finite values.
    pub fn validate(&self) -> Result<(), EngineError> {
        [
            ("blur_radius", self.blur_radius),
            ("circle_radius", self.circle_radius),
            ("shadow_radius", self.shadow_radius),
            ("smoothness", self.smoothness),
            ("speed", self.speed),
        ]
        .into_iter()
        .try_for_each(|(name, value)| check_non_negative(name, value))
    }

    pub fn to_json(&self) -> Value {
        json!({
            "blur_radius": self.blur_radius,
            "circle_radius": self.circle_radius,
            "shadow_radius": self.shadow_radius,
            "count": self.count,
            "smoothness": self.smoothness,
            "speed": self.speed,
        })
    }

    /// Type, default, slider range and description of every parameter.
    pub fn param_schema() -> Value {
        json!({
            "blur_radius": {
                "type": "number",
                "default": DEFAULT_BLUR_RADIUS,
                "min": 0.0,
                "max": 200.0,
                "description": "Backdrop blur in pixels"
            },
            "circle_radius": {
                "type": "number",
                "default": DEFAULT_CIRCLE_RADIUS,
                "min": 10.0,
                "max": 300.0,
                "description": "Disc radius in pixels"
            },
            "shadow_radius": {
                "type": "number",
                "default": DEFAULT_SHADOW_RADIUS,
                "min": 0.0,
                "max": 100.0,
                "description": "Glow radius around each disc in pixels"
            },
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "min": 0,
                "max": 500,
                "description": "Number of discs; changing it reinitializes the population"
            },
            "smoothness": {
                "type": "number",
                "default": DEFAULT_SMOOTHNESS,
                "min": 0.0,
                "max": 20.0,
                "description": "Pointer repulsion displacement per frame in pixels"
            },
            "speed": {
                "type": "number",
                "default": DEFAULT_SPEED,
                "min": 0.0,
                "max": 10.0,
                "description": "Drift velocity scale; changing it re-rolls velocities"
            }
        })
    }
}

/// Setter-boundary check shared by [`Settings::validate`] and the scene setters.
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidParam {
            name: name.to_string(),
            value,
        })
    }
}
