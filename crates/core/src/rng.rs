//! RNG module - seedable random sources for tile generation
//!
//! All randomness in the engine goes through [`TileRng`], so a game is fully
//! replayable from its seed (or from a scripted sequence in tests).
//!
//! - [`SimpleRng`]: LCG used by default
//! - [`SequenceRng`]: replays a fixed list of values (fixtures, replays)

use crate::types::TileKind;

/// Source of random numbers for tile draws
pub trait TileRng {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl<R: TileRng + ?Sized> TileRng for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
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
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl TileRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods.
        self.state >> 8
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }
}

impl TileRng for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}

/// Draw a uniformly random kind among the first `kind_count` kinds
pub fn draw_kind<R: TileRng + ?Sized>(rng: &mut R, kind_count: u8) -> TileKind {
    let count = kind_count.clamp(1, TileKind::ALL.len() as u8) as u32;
    let i = rng.next_range(count) as usize;
    TileKind::ALL[i]
}
