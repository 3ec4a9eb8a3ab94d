//! Ordered palette of hex colors: entry 0 is the background, entries `1..` form
//! the gradient ring sampled by [`crate::gradient::sample`].

use crate::color::Rgb;
use crate::error::EngineError;
use crate::prng::Xorshift64;

/// Names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["default", "ocean", "neon", "fire", "vapor"];

/// Number of entries in a randomized palette.
pub const RANDOM_PALETTE_LEN: usize = 7;

/// An ordered palette with at least two entries.
///
/// Entry 0 doubles as the page background; the gradient ring is entries
/// `1..len`. The length invariant is enforced by every constructor and by
/// [`Palette::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a palette, rejecting fewer than two colors.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, EngineError> {
        if colors.len() < 2 {
            return Err(EngineError::InvalidPalette(format!(
                "palette requires at least 2 colors, got {}",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// Parses `#rrggbb` strings into a palette.
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, EngineError> {
        let colors = hexes
            .iter()
            .map(|h| Rgb::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// A palette of [`RANDOM_PALETTE_LEN`] uniformly random colors.
    pub fn random(rng: &mut Xorshift64) -> Self {
        Self {
            colors: (0..RANDOM_PALETTE_LEN).map(|_| Rgb::random(rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: a palette holds at least two colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// The page background color (entry 0).
    pub fn background(&self) -> Rgb {
        self.colors[0]
    }

    /// Replaces the whole palette. On error the current colors are kept.
    pub fn replace(&mut self, colors: Vec<Rgb>) -> Result<(), EngineError> {
        *self = Self::new(colors)?;
        Ok(())
    }

    /// Overwrites a single entry.
    pub fn set_entry(&mut self, index: usize, color: Rgb) -> Result<(), EngineError> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(EngineError::PaletteIndexOutOfRange { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Samples the gradient ring; see [`crate::gradient::sample`].
    pub fn sample(&self, progress: f64, offset: f64) -> Rgb {
        crate::gradient::sample(progress, offset, self)
    }

    /// Colors as `#rrggbb` strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    // -- Built-in palettes --

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "default" => Ok(Self::default()),
            "ocean" => Ok(Self::ocean()),
            "neon" => Ok(Self::neon()),
            "fire" => Ok(Self::fire()),
            "vapor" => Ok(Self::vapor()),
            _ => Err(EngineError::UnknownPalette(name.to_string())),
        }
    }

    /// Names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Deep blue background, cool blues to sea foam.
    pub fn ocean() -> Self {
        Self::builtin(&["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd", "#e9d8a6"])
    }

    pub fn neon() -> Self {
        Self::builtin(&["#0b0014", "#ff00ff", "#00ff41", "#ffff00", "#ff0080", "#00ffff"])
    }

    pub fn fire() -> Self {
        Self::builtin(&["#1a0000", "#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"])
    }

    /// Pastel purples, pinks, teals.
    pub fn vapor() -> Self {
        Self::builtin(&["#2d1b3d", "#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6", "#a0e7e5"])
    }

    fn builtin(hexes: &[&str]) -> Self {
        Self {
            colors: hexes
                .iter()
                .map(|h| Rgb::from_hex(h).unwrap_or_default())
                .collect(),
        }
    }
}

impl Default for Palette {
    /// Indigo background with a warm pink/orange/violet ring.
    fn default() -> Self {
        Self::builtin(&[
            "#1b0cec", "#FF9AAD", "#FF6B6B", "#FF9E2C", "#D6A3FF", "#BE33FF", "#F8D0B8",
        ])
    }
}
