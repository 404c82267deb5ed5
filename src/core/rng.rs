//! RNG module - seeded piece generation.
//!
//! A small LCG keeps the engine deterministic per seed, which the tests and
//! restarts rely on. Spawn variants are drawn uniformly and independently;
//! there is no bag balancing.

use crate::types::PieceVariant;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point of the LCG.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        // state = (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform source of spawn variants
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    /// Create a new source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next variant, each of the seven equally likely
    pub fn draw(&mut self) -> PieceVariant {
        let idx = self.rng.next_range(PieceVariant::ALL.len() as u32);
        PieceVariant::ALL[idx as usize]
    }

    /// Current RNG state; seeding a new source with it reproduces the
    /// remaining draw sequence
    pub fn state(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
