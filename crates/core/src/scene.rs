//! `BlobScene`: the complete simulation state behind one animated background.
//!
//! Owns the canvas size, palette, settings, point population and pointer
//! debounce, and exposes the setters the control surface drives. Setters
//! validate their input and leave the scene untouched on error.

use std::time::Duration;

use glam::DVec2;
use serde_json::{json, Value};

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::draw::DrawCommand;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::palette::Palette;
use crate::params::param_strings;
use crate::point_field::{FrameContext, PointField, TickInput};
use crate::pointer::PointerTracker;
use crate::prng::Xorshift64;
use crate::settings::{check_non_negative, Settings};

/// Simulation state for one canvas.
#[derive(Debug, Clone)]
pub struct BlobScene {
    canvas: Canvas,
    palette: Palette,
    settings: Settings,
    field: PointField,
    pointer: PointerTracker,
    frame: Vec<DrawCommand>,
}

impl BlobScene {
    /// Creates a scene and populates it with `settings.count` points.
    ///
    /// The pointer starts idle at the canvas centre.
    pub fn new(
        canvas: Canvas,
        palette: Palette,
        settings: Settings,
        rng: Xorshift64,
    ) -> Result<Self, EngineError> {
        settings.validate()?;
        let mut field = PointField::new(rng);
        field.initialize(settings.count, &canvas, settings.speed);
        Ok(Self {
            pointer: PointerTracker::new(canvas.center()),
            frame: Vec::with_capacity(settings.count),
            canvas,
            palette,
            settings,
            field,
        })
    }

    /// Default palette and settings on a `width` x `height` canvas, seeded
    /// from OS entropy.
    pub fn with_defaults(width: f64, height: f64) -> Result<Self, EngineError> {
        Self::new(
            Canvas::new(width, height)?,
            Palette::default(),
            Settings::default(),
            Xorshift64::from_entropy(),
        )
    }

    // -- Per-frame --

    /// Records a pointer event at monotonic time `now`.
    ///
    /// Coordinates are stored as given; non-finite values are the caller's bug.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now: Duration) {
        self.pointer.on_move(DVec2::new(x, y), now);
    }

    /// Advances the population by one frame and returns its draw commands.
    pub fn tick(&mut self, now: Duration) -> &[DrawCommand] {
        let input = TickInput {
            pointer: self.pointer.position(),
            pointer_active: self.pointer.advance(now),
            now,
        };
        let ctx = FrameContext {
            canvas: &self.canvas,
            palette: &self.palette,
            settings: &self.settings,
        };
        self.frame.clear();
        self.field.tick(input, ctx, &mut self.frame);
        log::trace!(
            "frame at {:?}: {} commands, pointer active={}",
            now,
            self.frame.len(),
            input.pointer_active
        );
        &self.frame
    }

    // -- Setters --

    /// Replaces the whole palette; requires at least two colors.
    pub fn set_palette_whole(&mut self, colors: Vec<Rgb>) -> Result<(), EngineError> {
        self.palette.replace(colors)?;
        log::debug!("palette replaced: {:?}", self.palette.to_hex());
        Ok(())
    }

    /// Overwrites one palette entry; index 0 also changes the background.
    pub fn set_palette_entry(&mut self, index: usize, color: Rgb) -> Result<(), EngineError> {
        self.palette.set_entry(index, color)?;
        log::debug!("palette entry {index} set to {}", color.to_hex());
        Ok(())
    }

    /// Replaces the palette with freshly drawn random colors.
    pub fn randomize_palette(&mut self) {
        self.palette = Palette::random(self.field.rng_mut());
        log::debug!("palette randomized: {:?}", self.palette.to_hex());
    }

    /// Sets the population size and rebuilds every point from scratch.
    pub fn set_population_count(&mut self, count: usize) {
        self.settings.count = count;
        self.field.initialize(count, &self.canvas, self.settings.speed);
    }

    pub fn set_circle_radius(&mut self, radius: f64) -> Result<(), EngineError> {
        check_non_negative("circle_radius", radius)?;
        self.settings.circle_radius = radius;
        Ok(())
    }

    /// Sets the drift scale and re-rolls every point's velocity.
    pub fn set_speed_factor(&mut self, speed: f64) -> Result<(), EngineError> {
        check_non_negative("speed", speed)?;
        self.settings.speed = speed;
        self.field.reroll_velocities(speed);
        Ok(())
    }

    pub fn set_smoothness_factor(&mut self, smoothness: f64) -> Result<(), EngineError> {
        check_non_negative("smoothness", smoothness)?;
        self.settings.smoothness = smoothness;
        Ok(())
    }

    pub fn set_shadow_radius(&mut self, radius: f64) -> Result<(), EngineError> {
        check_non_negative("shadow_radius", radius)?;
        self.settings.shadow_radius = radius;
        Ok(())
    }

    pub fn set_blur_radius(&mut self, radius: f64) -> Result<(), EngineError> {
        check_non_negative("blur_radius", radius)?;
        self.settings.blur_radius = radius;
        Ok(())
    }

    /// Changes the canvas size. Points keep their positions and are wrapped
    /// into the new bounds on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), EngineError> {
        self.canvas = Canvas::new(width, height)?;
        Ok(())
    }

    /// Restores default settings and rebuilds the population. The palette is
    /// kept.
    pub fn reset_defaults(&mut self) {
        self.settings = Settings::default();
        self.field.initialize(self.settings.count, &self.canvas, self.settings.speed);
        log::debug!("settings reset to defaults");
    }

    // -- Accessors --

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Draw commands produced by the most recent tick.
    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }
}

impl Engine for BlobScene {
    fn step(&mut self, now: Duration) -> &[DrawCommand] {
        self.tick(now)
    }

    fn background(&self) -> Rgb {
        self.palette.background()
    }

    fn params(&self) -> Value {
        let mut params = self.settings.to_json();
        params["colors"] = json!(self.palette.to_hex());
        params
    }

    fn param_schema(&self) -> Value {
        let mut schema = Settings::param_schema();
        schema["colors"] = json!({
            "type": "array",
            "items": "string",
            "min_items": 2,
            "default": Palette::default().to_hex(),
            "description": "Hex colors; entry 0 is the background, entries 1.. form the gradient ring"
        });
        schema
    }

    /// Validates every present key before applying any of them. A changed
    /// `count` rebuilds the population; a present `speed` re-rolls velocities.
    fn apply_params(&mut self, params: &Value) -> Result<(), EngineError> {
        let next = self.settings.merged(params);
        next.validate()?;
        let palette = match param_strings(params, "colors") {
            Some(hexes) => Some(Palette::from_hex(hexes.as_slice())?),
            None => None,
        };

        let recount = next.count != self.settings.count;
        let respeed = params.get("speed").and_then(Value::as_f64).is_some();
        self.settings = next;
        if let Some(palette) = palette {
            self.palette = palette;
        }
        if recount {
            self.field.initialize(self.settings.count, &self.canvas, self.settings.speed);
        } else if respeed {
            self.field.reroll_velocities(self.settings.speed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> BlobScene {
        BlobScene::new(
            Canvas::new(1280.0, 720.0).unwrap(),
            Palette::default(),
            Settings::default(),
            Xorshift64::new(42),
        )
        .unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ---- Construction ----

    #[test]
    fn new_populates_default_count() {
        let s = scene();
        assert_eq!(s.field().len(), 120);
        assert_eq!(s.pointer().position(), DVec2::new(640.0, 360.0));
        assert!(!s.pointer().is_active());
    }

    #[test]
    fn new_rejects_invalid_settings() {
        let bad = Settings {
            smoothness: -1.0,
            ..Settings::default()
        };
        let result = BlobScene::new(
            Canvas::new(10.0, 10.0).unwrap(),
            Palette::default(),
            bad,
            Xorshift64::new(1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn with_defaults_rejects_zero_canvas() {
        assert!(BlobScene::with_defaults(0.0, 100.0).is_err());
    }

    // ---- Frame loop ----

    #[test]
    fn tick_emits_one_command_per_point() {
        let mut s = scene();
        assert_eq!(s.tick(ms(0)).len(), 120);
        assert_eq!(s.frame().len(), 120);
    }

    #[test]
    fn pointer_goes_idle_one_second_after_last_move() {
        let mut s = scene();
        s.pointer_moved(10.0, 10.0, ms(0));
        s.tick(ms(16));
        assert!(s.pointer().is_active());
        s.tick(ms(1000));
        assert!(!s.pointer().is_active());
    }

    #[test]
    fn progress_moves_only_while_pointer_active() {
        let mut s = scene();
        s.tick(ms(0));
        assert!(s.field().progress().iter().all(|&p| p == 0.5));

        s.pointer_moved(0.0, 0.0, ms(10));
        s.tick(ms(20));
        assert!(s.field().progress().iter().any(|&p| p != 0.5));

        s.tick(ms(2000));
        let frozen = s.field().progress().to_vec();
        s.tick(ms(2016));
        assert_eq!(s.field().progress(), frozen.as_slice());
    }

    // ---- Setters ----

    #[test]
    fn set_population_count_resets_population() {
        let mut s = scene();
        s.pointer_moved(0.0, 0.0, ms(0));
        s.tick(ms(1));
        s.set_population_count(25);
        assert_eq!(s.settings().count, 25);
        assert_eq!(s.field().len(), 25);
        for (p, &prog) in s.field().points().iter().zip(s.field().progress()) {
            assert_eq!(prog, 0.5);
            assert!((0.0..0.2).contains(&p.random_offset));
            assert!((0.0..1280.0).contains(&p.position.x));
            assert!((0.0..720.0).contains(&p.position.y));
        }
    }

    #[test]
    fn set_population_count_zero_yields_empty_frames() {
        let mut s = scene();
        s.set_population_count(0);
        assert!(s.tick(ms(0)).is_empty());
    }

    #[test]
    fn set_speed_factor_rerolls_velocities_within_scale() {
        let mut s = scene();
        s.set_speed_factor(0.2).unwrap();
        assert!(s
            .field()
            .points()
            .iter()
            .all(|p| p.velocity.x.abs() <= 0.1 && p.velocity.y.abs() <= 0.1));
    }

    #[test]
    fn numeric_setters_reject_negative_values_without_changing_state() {
        let mut s = scene();
        assert!(s.set_circle_radius(-1.0).is_err());
        assert!(s.set_speed_factor(f64::NAN).is_err());
        assert!(s.set_smoothness_factor(-0.1).is_err());
        assert!(s.set_shadow_radius(f64::INFINITY).is_err());
        assert!(s.set_blur_radius(-5.0).is_err());
        assert_eq!(*s.settings(), Settings::default());
    }

    #[test]
    fn set_circle_radius_is_reflected_in_draw_commands() {
        let mut s = scene();
        s.set_circle_radius(42.0).unwrap();
        s.set_shadow_radius(3.0).unwrap();
        assert!(s
            .tick(ms(0))
            .iter()
            .all(|c| c.radius == 42.0 && c.shadow_radius == 3.0));
    }

    #[test]
    fn palette_entry_zero_drives_background() {
        let mut s = scene();
        s.set_palette_entry(0, Rgb::WHITE).unwrap();
        assert_eq!(s.background(), Rgb::WHITE);
        assert!(s.set_palette_entry(99, Rgb::WHITE).is_err());
    }

    #[test]
    fn whole_palette_must_have_two_entries() {
        let mut s = scene();
        assert!(s.set_palette_whole(vec![Rgb::BLACK]).is_err());
        assert_eq!(*s.palette(), Palette::default());
        s.set_palette_whole(vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert!(s.tick(ms(0)).iter().all(|c| c.fill == Rgb::WHITE));
    }

    #[test]
    fn randomize_palette_produces_seven_colors() {
        let mut s = scene();
        s.randomize_palette();
        assert_eq!(s.palette().len(), 7);
    }

    #[test]
    fn reset_defaults_restores_settings_and_keeps_palette() {
        let mut s = scene();
        s.set_palette_entry(1, Rgb::BLACK).unwrap();
        s.set_population_count(3);
        s.set_circle_radius(5.0).unwrap();
        s.reset_defaults();
        assert_eq!(*s.settings(), Settings::default());
        assert_eq!(s.field().len(), 120);
        assert_eq!(s.palette().get(1), Some(Rgb::BLACK));
    }

    #[test]
    fn resize_rejects_invalid_and_keeps_points() {
        let mut s = scene();
        assert!(s.resize(-1.0, 10.0).is_err());
        let before = s.field().points().to_vec();
        s.resize(640.0, 480.0).unwrap();
        assert_eq!(s.canvas().width(), 640.0);
        assert_eq!(s.field().points(), before.as_slice());
    }

    #[test]
    fn tick_after_resize_wraps_into_new_bounds_and_uses_new_diagonal() {
        let mut s = scene();
        s.resize(200.0, 100.0).unwrap();
        s.set_circle_radius(10.0).unwrap();
        s.set_smoothness_factor(0.0).unwrap();
        let pointer = DVec2::new(50.0, 50.0);
        s.pointer_moved(pointer.x, pointer.y, ms(0));
        let before: Vec<(DVec2, f64)> = s
            .field()
            .points()
            .iter()
            .zip(s.field().progress())
            .map(|(p, &prog)| (p.position, prog))
            .collect();
        s.tick(ms(16));

        let diagonal = 200.0_f64.hypot(100.0);
        for (&(pos, prog), &now) in before.iter().zip(s.field().progress()) {
            let t = pos.distance(pointer) / diagonal;
            let expected = prog + (t - prog) * 0.05;
            assert!((now - expected).abs() < 1e-9, "progress {now} != {expected}");
        }
        for p in s.field().points() {
            assert!((-10.0..=210.0).contains(&p.position.x), "x = {}", p.position.x);
            assert!((-10.0..=110.0).contains(&p.position.y), "y = {}", p.position.y);
        }
    }

    // ---- Engine params ----

    #[test]
    fn params_include_settings_and_colors() {
        let s = scene();
        let p = s.params();
        assert_eq!(p["count"], 120);
        assert_eq!(p["colors"][0], "#1b0cec");
    }

    #[test]
    fn param_schema_documents_colors() {
        let s = scene();
        assert_eq!(s.param_schema()["colors"]["type"], "array");
        assert!(s.param_schema().get("speed").is_some());
    }

    #[test]
    fn apply_params_changes_count_and_palette() {
        let mut s = scene();
        s.apply_params(&json!({"count": 8, "colors": ["#000000", "#ffffff"]}))
            .unwrap();
        assert_eq!(s.field().len(), 8);
        assert_eq!(s.palette().len(), 2);
    }

    #[test]
    fn malformed_speed_does_not_reroll_velocities() {
        let mut s = scene();
        let before = s.field().points().to_vec();
        s.apply_params(&json!({"speed": "fast"})).unwrap();
        assert_eq!(s.settings().speed, 1.5);
        assert_eq!(s.field().points(), before.as_slice());
    }

    #[test]
    fn apply_params_is_all_or_nothing() {
        let mut s = scene();
        let err = s.apply_params(&json!({"count": 8, "colors": ["#000000"]}));
        assert!(err.is_err());
        assert_eq!(s.field().len(), 120);
        let err = s.apply_params(&json!({"count": 8, "speed": -3.0}));
        assert!(err.is_err());
        assert_eq!(s.settings().count, 120);
    }
}
