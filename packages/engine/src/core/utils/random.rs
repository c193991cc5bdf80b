//! Xorshift32 random source
//!
//! The solver owns one instance and threads it through reactions and
//! behaviors, so a fixed seed replays a run exactly.

/// Seed used when none is supplied (xorshift state must never be zero).
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [min, max).
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// Uniform integer in [0, bound). Returns 0 for an empty range.
    #[inline]
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u32() as usize) % bound
    }

    /// Roll against a 0-255 chance (255 is near-certain, 0 never fires).
    #[inline]
    pub fn chance(&mut self, chance: u8) -> bool {
        ((self.next_u32() & 0xFF) as u8) < chance
    }

    /// One-in-`n` roll.
    #[inline]
    pub fn one_in(&mut self, n: u32) -> bool {
        n != 0 && self.next_u32() % n == 0
    }

    /// -1.0 or 1.0
    #[inline]
    pub fn sign(&mut self) -> f32 {
        if self.next_u32() & 1 == 0 { -1.0 } else { 1.0 }
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
