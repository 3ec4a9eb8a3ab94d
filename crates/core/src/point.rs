//! A single drifting disc.

use std::time::Duration;

use glam::DVec2;

/// Upper bound (exclusive) of the per-point gradient offset.
pub const MAX_RANDOM_OFFSET: f64 = 0.2;

/// One moving entity. Its index in the population is its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub position: DVec2,
    /// Ambient drift added every tick.
    pub velocity: DVec2,
    /// Fixed jitter in `[0, MAX_RANDOM_OFFSET)` added to progress before sampling.
    pub random_offset: f64,
    /// While `now` is before this instant the point may not take another idle
    /// step toward the pointer.
    pub cooldown_until: Option<Duration>,
}

impl Point {
    pub fn new(position: DVec2, velocity: DVec2, random_offset: f64) -> Self {
        Self {
            position,
            velocity,
            random_offset,
            cooldown_until: None,
        }
    }

    /// True while the idle drift-to-pointer step is throttled.
    pub fn is_moving_to_pointer(&self, now: Duration) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }
}
