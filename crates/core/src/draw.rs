//! Per-entity draw command handed to the renderer.

use glam::DVec2;
use serde::Serialize;

use crate::color::Rgb;

/// A blurred filled disc: fill and glow share the same color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub center: DVec2,
    pub radius: f64,
    pub fill: Rgb,
    pub shadow_radius: f64,
    pub shadow_color: Rgb,
}

impl DrawCommand {
    pub fn disc(center: DVec2, radius: f64, fill: Rgb, shadow_radius: f64) -> Self {
        Self {
            center,
            radius,
            fill,
            shadow_radius,
            shadow_color: fill,
        }
    }
}
