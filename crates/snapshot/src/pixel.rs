//! Pure-computation rasterization of draw commands into an RGBA8 buffer.
//!
//! Has no feature gate: PNG export builds on it, and embedders can blit the
//! buffer straight into their own surface.

use blobfield_core::{DrawCommand, Rgb};

/// Paints `commands` in order over a `background`-filled `width` x `height`
/// surface, then blurs the whole frame by `blur` pixels.
///
/// Each disc gets an anti-aliased edge and, when `shadow_radius > 0`, a glow
/// ring of that width whose opacity falls off linearly from 0.5 at the rim.
/// The returned buffer is `width * height * 4` bytes with alpha always 255.
pub fn rasterize(
    commands: &[DrawCommand],
    background: Rgb,
    width: usize,
    height: usize,
    blur: f64,
) -> Vec<u8> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut canvas = vec![channels_f32(background); width * height];
    for cmd in commands {
        paint_disc(&mut canvas, width, height, cmd);
    }
    let radius = if blur.is_finite() { blur.max(0.0).round() as usize } else { 0 };
    if radius > 0 {
        box_blur(&mut canvas, width, height, radius);
    }
    canvas
        .iter()
        .flat_map(|px| {
            let [r, g, b] = px.map(|c| c.round().clamp(0.0, 255.0) as u8);
            [r, g, b, 255u8]
        })
        .collect()
}

fn channels_f32(c: Rgb) -> [f32; 3] {
    c.channels().map(f32::from)
}

/// Coverage of the disc plus glow at distance `d` from the centre.
fn coverage(d: f64, radius: f64, shadow: f64) -> f64 {
    let body = (radius + 0.5 - d).clamp(0.0, 1.0);
    if shadow <= 0.0 || d <= radius {
        return body;
    }
    let glow = 0.5 * (1.0 - (d - radius) / shadow).max(0.0);
    body.max(glow)
}

fn paint_disc(canvas: &mut [[f32; 3]], width: usize, height: usize, cmd: &DrawCommand) {
    let reach = cmd.radius + cmd.shadow_radius.max(0.0) + 1.0;
    let x0 = (cmd.center.x - reach).floor().max(0.0) as usize;
    let y0 = (cmd.center.y - reach).floor().max(0.0) as usize;
    let x1 = ((cmd.center.x + reach).ceil().max(0.0) as usize).min(width);
    let y1 = ((cmd.center.y + reach).ceil().max(0.0) as usize).min(height);
    let fill = channels_f32(cmd.fill);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f64 + 0.5 - cmd.center.x;
            let dy = y as f64 + 0.5 - cmd.center.y;
            let a = coverage(dx.hypot(dy), cmd.radius, cmd.shadow_radius) as f32;
            if a <= 0.0 {
                continue;
            }
            let px = &mut canvas[y * width + x];
            for (dst, src) in px.iter_mut().zip(fill) {
                *dst += (src - *dst) * a;
            }
        }
    }
}

/// Separable box blur with clamped edges.
fn box_blur(canvas: &mut [[f32; 3]], width: usize, height: usize, radius: usize) {
    let mut scratch = vec![[0.0f32; 3]; canvas.len()];
    blur_pass(canvas, &mut scratch, width, height, radius, true);
    blur_pass(&scratch, canvas, width, height, radius, false);
}

fn blur_pass(
    src: &[[f32; 3]],
    dst: &mut [[f32; 3]],
    width: usize,
    height: usize,
    radius: usize,
    horizontal: bool,
) {
    let (lines, len) = if horizontal { (height, width) } else { (width, height) };
    let index = |line: usize, i: usize| {
        if horizontal {
            line * width + i
        } else {
            i * width + line
        }
    };
    let window = (2 * radius + 1) as f32;
    for line in 0..lines {
        let at = |i: isize| src[index(line, i.clamp(0, len as isize - 1) as usize)];
        let mut sum = [0.0f32; 3];
        for i in -(radius as isize)..=radius as isize {
            let px = at(i);
            for c in 0..3 {
                sum[c] += px[c];
            }
        }
        for i in 0..len {
            dst[index(line, i)] = sum.map(|s| s / window);
            let incoming = at(i as isize + radius as isize + 1);
            let outgoing = at(i as isize - radius as isize);
            for c in 0..3 {
                sum[c] += incoming[c] - outgoing[c];
            }
        }
    }
}
