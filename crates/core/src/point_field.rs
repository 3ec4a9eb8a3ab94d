//! The population of drifting discs and its per-frame update.
//!
//! Each tick a point is pushed away from a nearby pointer, nudged toward an
//! idle pointer at most once per second, carried by its drift velocity and
//! wrapped at the canvas edges. While the pointer moves, every point's color
//! progress eases toward its normalized distance from the pointer.

use std::time::Duration;

use glam::DVec2;

use crate::canvas::Canvas;
use crate::draw::DrawCommand;
use crate::palette::Palette;
use crate::point::{Point, MAX_RANDOM_OFFSET};
use crate::prng::Xorshift64;
use crate::settings::Settings;

/// Pointer distance in pixels below which points are pushed away.
pub const REPULSION_RADIUS: f64 = 160.0;
/// First-order low-pass factor for color progress.
pub const PROGRESS_SMOOTHING: f64 = 0.05;
/// Progress assigned to every point on (re)initialization.
pub const INITIAL_PROGRESS: f64 = 0.5;
/// Length of one idle step toward the pointer, in pixels.
pub const IDLE_DRIFT_STEP: f64 = 0.5;
/// Minimum spacing between two idle steps of the same point.
pub const IDLE_DRIFT_COOLDOWN: Duration = Duration::from_millis(1000);

/// Pointer state sampled at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub pointer: DVec2,
    pub pointer_active: bool,
    pub now: Duration,
}

/// Read-only configuration for a tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub canvas: &'a Canvas,
    pub palette: &'a Palette,
    pub settings: &'a Settings,
}

/// Points plus one color-progress slot per point.
///
/// `progress.len() == points.len()` always; both are rebuilt together by
/// [`PointField::initialize`].
#[derive(Debug, Clone)]
pub struct PointField {
    points: Vec<Point>,
    progress: Vec<f64>,
    rng: Xorshift64,
}

impl PointField {
    /// An empty field; call [`PointField::initialize`] to populate it.
    pub fn new(rng: Xorshift64) -> Self {
        Self {
            points: Vec::new(),
            progress: Vec::new(),
            rng,
        }
    }

    /// Discards every point and creates `count` fresh ones.
    ///
    /// Positions are uniform over the canvas, velocity axes uniform in
    /// `[-0.5, 0.5) * speed`, offsets uniform in `[0, 0.2)`, progress 0.5.
    pub fn initialize(&mut self, count: usize, canvas: &Canvas, speed: f64) {
        let rng = &mut self.rng;
        self.points = (0..count)
            .map(|_| {
                let position = DVec2::new(
                    rng.next_range(0.0, canvas.width()),
                    rng.next_range(0.0, canvas.height()),
                );
                let velocity = DVec2::new(rng.next_centered(speed), rng.next_centered(speed));
                Point::new(position, velocity, rng.next_range(0.0, MAX_RANDOM_OFFSET))
            })
            .collect();
        self.progress = vec![INITIAL_PROGRESS; count];
        log::debug!(
            "point field initialized: {count} points on {}x{} canvas",
            canvas.width(),
            canvas.height()
        );
    }

    /// Draws new drift velocities for every point; positions and progress are
    /// untouched.
    pub fn reroll_velocities(&mut self, speed: f64) {
        for point in &mut self.points {
            point.velocity = DVec2::new(
                self.rng.next_centered(speed),
                self.rng.next_centered(speed),
            );
        }
        log::debug!("re-rolled {} drift velocities at speed {speed}", self.points.len());
    }

    /// Advances every point by one frame and appends one draw command per
    /// point, in population order, to `out`.
    ///
    /// Non-finite pointer coordinates are the caller's responsibility.
    pub fn tick(&mut self, input: TickInput, ctx: FrameContext<'_>, out: &mut Vec<DrawCommand>) {
        let diagonal = ctx.canvas.diagonal();
        let radius = ctx.settings.circle_radius;
        let shadow = ctx.settings.shadow_radius;

        for (point, progress) in self.points.iter_mut().zip(self.progress.iter_mut()) {
            let dist = point.position.distance(input.pointer);
            let t = dist / diagonal;

            if input.pointer_active {
                *progress += (t - *progress) * PROGRESS_SMOOTHING;
            }

            let color = ctx.palette.sample(*progress, point.random_offset);

            if dist < REPULSION_RADIUS {
                let push = ctx.settings.smoothness * (1.0 - t);
                point.position -= bearing(point.position, input.pointer) * push;
            }

            if !input.pointer_active && !point.is_moving_to_pointer(input.now) {
                point.position += bearing(point.position, input.pointer) * IDLE_DRIFT_STEP;
                point.cooldown_until = Some(input.now + IDLE_DRIFT_COOLDOWN);
            }

            point.position += point.velocity;
            point.position = ctx.canvas.wrap(point.position, radius);

            out.push(DrawCommand::disc(point.position, radius, color, shadow));
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn progress(&self) -> &[f64] {
        &self.progress
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Overrides one point's progress, clamped to [0, 1]. Returns false if
    /// `index` is out of range.
    pub fn set_progress(&mut self, index: usize, value: f64) -> bool {
        match self.progress.get_mut(index) {
            Some(slot) => {
                *slot = if value.is_nan() { INITIAL_PROGRESS } else { value.clamp(0.0, 1.0) };
                true
            }
            None => false,
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Xorshift64 {
        &mut self.rng
    }
}

/// Unit vector pointing from `from` toward `to`, via `atan2` so coincident
/// points yield a bearing of 0 instead of NaN.
fn bearing(from: DVec2, to: DVec2) -> DVec2 {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    DVec2::new(angle.cos(), angle.sin())
}
