//! Scripted pointer paths that stand in for a real mouse in headless runs.

use std::f64::consts::TAU;

use clap::ValueEnum;
use glam::DVec2;

/// Seconds per revolution / sweep / pause cycle.
const PERIOD: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PointerScript {
    /// No pointer events; the field just drifts.
    None,
    /// Circles the canvas centre at a quarter of the short side.
    Orbit,
    /// Sweeps back and forth along the horizontal midline.
    Sweep,
    /// Orbits for half of each cycle, then goes quiet so the field settles.
    Pause,
}

impl PointerScript {
    /// Pointer position at `t` seconds, or `None` if no event fires then.
    pub fn position(self, t: f64, width: f64, height: f64) -> Option<DVec2> {
        let center = DVec2::new(width / 2.0, height / 2.0);
        match self {
            PointerScript::None => None,
            PointerScript::Orbit => Some(orbit(t, center, width.min(height) / 4.0)),
            PointerScript::Sweep => {
                let phase = (t / PERIOD).fract();
                let tri = 1.0 - (2.0 * phase - 1.0).abs();
                Some(DVec2::new(tri * width, center.y))
            }
            PointerScript::Pause => {
                if (t / PERIOD).fract() < 0.5 {
                    Some(orbit(t, center, width.min(height) / 4.0))
                } else {
                    None
                }
            }
        }
    }
}

fn orbit(t: f64, center: DVec2, radius: f64) -> DVec2 {
    let angle = TAU * t / PERIOD;
    center + DVec2::new(angle.cos(), angle.sin()) * radius
}
