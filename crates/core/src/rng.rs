//! RNG module - uniform random source for spawning
//!
//! The game only needs a uniform index in `[0, 7)` per spawn. The
//! [`RandomSource`] trait is the seam for plugging in any generator;
//! [`SimpleRng`] is the deterministic default so that a seed replays a game.

use crate::types::ShapeKind;

/// Uniform integer source
pub trait RandomSource {
    /// Uniform value in `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Uniformly chosen shape kind
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state, enough to resume the same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "random range must be non-empty");
        // Low LCG bits have short periods
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
