//! RNG module - bag randomizer for piece selection
//!
//! The randomizer keeps a bag holding each of the 7 shape indices once and hands
//! them out in order. Whenever a draw starts a fresh pass over the bag it is
//! reshuffled first, so every run of 7 draws starting at a bag boundary yields
//! each piece exactly once.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::shapes::Shape;

/// Number of slots in the bag (one per piece kind).
pub const BAG_SIZE: usize = 7;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

/// How the bag is reshuffled at the start of each pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// Seven independent transpositions of two uniformly chosen slots.
    ///
    /// Not a uniform permutation, but every bag still holds each piece once.
    #[default]
    Swaps,
    /// A single Fisher-Yates pass (uniform permutation).
    FisherYates,
}

/// Bag-based piece generator.
#[derive(Debug, Clone)]
pub struct Randomizer {
    bag: [usize; BAG_SIZE],
    /// Next slot to hand out; 0 means the bag is reshuffled before the draw.
    cursor: usize,
    mode: ShuffleMode,
    rng: SimpleRng,
}

impl Randomizer {
    pub fn new(seed: u32) -> Self {
        Self::with_mode(seed, ShuffleMode::default())
    }

    pub fn with_mode(seed: u32, mode: ShuffleMode) -> Self {
        Self {
            bag: [0, 1, 2, 3, 4, 5, 6],
            cursor: 0,
            mode,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape index (0..7).
    pub fn next_index(&mut self) -> usize {
        if self.cursor >= BAG_SIZE {
            self.cursor = 0;
        }
        if self.cursor == 0 {
            self.shuffle();
        }
        let index = self.bag[self.cursor];
        self.cursor += 1;
        index
    }

    /// Draw the next piece in its spawn orientation.
    pub fn next_shape(&mut self) -> Shape {
        Shape::from_index(self.next_index())
    }

    /// True when the next draw starts a new pass over the bag.
    pub fn at_bag_boundary(&self) -> bool {
        self.cursor == 0 || self.cursor >= BAG_SIZE
    }

    fn shuffle(&mut self) {
        match self.mode {
            ShuffleMode::Swaps => {
                for _ in 0..BAG_SIZE {
                    let a = self.rng.next_range(BAG_SIZE as u32) as usize;
                    let b = self.rng.next_range(BAG_SIZE as u32) as usize;
                    self.bag.swap(a, b);
                }
            }
            ShuffleMode::FisherYates => {
                for i in (1..BAG_SIZE).rev() {
                    let j = self.rng.next_range((i + 1) as u32) as usize;
                    self.bag.swap(i, j);
                }
            }
        }
    }

    /// Get current bag for testing/debugging
    #[cfg(test)]
    pub fn current_bag(&self) -> &[usize] {
        &self.bag
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
