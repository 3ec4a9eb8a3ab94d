//! Canvas dimensions and the edge wrap-around policy.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Returns `EngineError::InvalidDimensions` unless both sides are finite and
    /// strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(EngineError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length of the canvas diagonal; normalizes pointer distance to [0, 1].
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Teleports a coordinate that left `[-radius, side + radius]` to the
    /// opposite extreme. Each axis is checked low bound first, then high bound.
    pub fn wrap(&self, position: DVec2, radius: f64) -> DVec2 {
        DVec2::new(
            wrap_axis(position.x, self.width, radius),
            wrap_axis(position.y, self.height, radius),
        )
    }
}

fn wrap_axis(mut v: f64, side: f64, radius: f64) -> f64 {
    if v < -radius {
        v = side + radius;
    }
    if v > side + radius {
        v = -radius;
    }
    v
}
