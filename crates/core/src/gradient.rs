//! Cyclic gradient sampling over a palette ring.
//!
//! The ring is formed by palette indices `1..=n` where `n = len - 1`; index 0
//! is the page background and never takes part in the gradient. A scalar
//! progress plus a per-point offset is stretched over `n - 1` segments, and the
//! segment after the last one wraps back to index 1.

use crate::color::Rgb;
use crate::palette::Palette;

/// Maps `progress + offset` to a color on the palette ring.
///
/// With `n = palette.len() - 1` and `t = (progress + offset) * (n - 1)`, the
/// result interpolates between `palette[i]` and `palette[next]` with fraction
/// `t - floor(t)`, where `i = floor(t) + 1` and `next = i + 1`, or `1` when
/// `i + 1 > n`.
///
/// The documented domain is `progress` in [0, 1] and `offset` in [0, 0.2).
/// The base index `floor(t)` is wrapped into `0..n` before the shift, so inputs
/// outside the domain (or long palettes where `1.2 * (n - 1) > n`) continue
/// around the ring instead of reading past the end.
///
/// A two-entry palette has `n = 1`: the segment count is zero, `t` is always
/// zero and every sample is `palette[1]`.
pub fn sample(progress: f64, offset: f64, palette: &Palette) -> Rgb {
    let colors = palette.colors();
    let n = colors.len() - 1;
    let t = (progress + offset) * (n as f64 - 1.0);
    let floor = t.floor();
    // `as` saturates and maps NaN to 0; rem_euclid keeps the base inside the ring.
    let base = (floor as i64).rem_euclid(n as i64) as usize;
    let i = base + 1;
    let next = if i + 1 > n { 1 } else { i + 1 };
    Rgb::lerp(colors[i], colors[next], t - floor)
}
