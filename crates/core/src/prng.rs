//! Xorshift64 PRNG used for point placement, drift velocities and palette
//! randomization.
//!
//! Nothing in the animation depends on replaying a sequence; the generator is
//! seeded from OS entropy by default and an explicit seed is only a
//! convenience for tests and the CLI.

/// Xorshift64 pseudo-random generator with shifts (13, 7, 17).
///
/// Seed 0 is a fixed point of the algorithm and is replaced with a non-zero
/// fallback.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a generator seeded from the thread-local OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform f64 in [-0.5, 0.5) scaled by `scale`; one drift velocity axis.
    pub fn next_centered(&mut self, scale: f64) -> f64 {
        (self.next_f64() - 0.5) * scale
    }
}
