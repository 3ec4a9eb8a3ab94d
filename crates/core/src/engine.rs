//! The frame-driven `Engine` trait consumed by the CLI and renderer.
//!
//! The trait is object-safe so drivers can hold a `Box<dyn Engine>`.

use std::time::Duration;

use serde_json::Value;

use crate::color::Rgb;
use crate::draw::DrawCommand;
use crate::error::EngineError;

/// A frame-driven animation producing draw commands.
///
/// `step` is not reentrant: it runs to completion once per display refresh and
/// state advances by exactly one tick per call regardless of wall-clock time.
pub trait Engine {
    /// Advance by one frame at monotonic time `now` and return this frame's
    /// draw commands in paint order.
    fn step(&mut self, now: Duration) -> &[DrawCommand];

    /// Color to clear the surface with before painting.
    fn background(&self) -> Rgb;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing every parameter: type, default, range, description.
    fn param_schema(&self) -> Value;

    /// Applies the keys present in `params`, leaving the rest unchanged.
    fn apply_params(&mut self, params: &Value) -> Result<(), EngineError>;
}
